//! Keepalived config: a single VRRP instance owning the floating IP

use crate::provision::settings::ProvisionConfig;

pub const INSTANCE_NAME: &str = "VI_1";

pub fn render(config: &ProvisionConfig) -> String {
    let vrrp = &config.failover;

    let mut out = String::new();
    out.push_str("# Generated by ha-provision.\n");
    out.push_str(&format!("vrrp_instance {} {{\n", INSTANCE_NAME));
    out.push_str(&format!("    state {}\n", vrrp.role));
    out.push_str(&format!("    interface {}\n", vrrp.interface));
    out.push_str(&format!(
        "    virtual_router_id {}\n",
        vrrp.virtual_router_id
    ));
    out.push_str(&format!("    priority {}\n", vrrp.priority));
    out.push_str("    advert_int 1\n");
    out.push_str("    virtual_ipaddress {\n");
    out.push_str(&format!("        {}\n", vrrp.floating_ip));
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigKey;
    use crate::provision::settings::{sample_config, sample_values};

    #[test]
    fn test_master_scenario() {
        let conf = render(&sample_config());
        assert!(conf.contains("    state MASTER\n"));
        assert!(conf.contains("    priority 150\n"));
        assert!(conf.contains("    virtual_ipaddress {\n        10.0.0.100\n    }\n"));
        assert!(!conf.contains("BACKUP"));
        assert_eq!(conf.matches("vrrp_instance").count(), 1);
    }

    #[test]
    fn test_backup_scenario() {
        let values = sample_values()
            .with(ConfigKey::Role, "BACKUP")
            .with(ConfigKey::Priority, "100");
        let config = ProvisionConfig::from_values(&values).unwrap();
        let conf = render(&config);
        assert!(conf.contains("    state BACKUP\n"));
        assert!(conf.contains("    priority 100\n"));
        assert!(!conf.contains("MASTER"));
    }

    #[test]
    fn test_interface_and_router_id() {
        let values = sample_values()
            .with(ConfigKey::KeepalivedInterface, "ens18")
            .with(ConfigKey::VirtualRouterId, "42");
        let config = ProvisionConfig::from_values(&values).unwrap();
        let conf = render(&config);
        assert!(conf.contains("    interface ens18\n"));
        assert!(conf.contains("    virtual_router_id 42\n"));
    }
}
