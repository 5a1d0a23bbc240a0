//! # Config Commands
//!
//! Command for retrieving application configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (store name in the header)
/// - Cart page (free-delivery banner)
/// - Currency formatting
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_wire_shape() {
        let json = serde_json::to_value(get_config(&ConfigState::default())).unwrap();

        assert_eq!(json["currencyCode"], "INR");
        assert_eq!(json["delivery"]["freeDeliveryThreshold"], 99_900);
        assert_eq!(json["cartPolicy"]["enforceStockLimit"], false);
    }
}
