//! Galera option-file fragment

use super::escape::option_string;
use crate::provision::settings::ProvisionConfig;

const WSREP_PROVIDER: &str = "/usr/lib/galera/libgalera_smm.so";

/// `gcomm://` bootstrap address: this host first, then every peer in order.
pub fn cluster_address(config: &ProvisionConfig) -> String {
    let mut members = vec![config.network.host_ip.as_str()];
    members.extend(config.network.peer_ips.iter());
    format!("gcomm://{}", members.join(","))
}

pub fn render(config: &ProvisionConfig) -> String {
    let net = &config.network;
    let db = &config.database;

    let mut out = String::new();
    out.push_str("# Generated by ha-provision.\n");
    out.push_str("[mysqld]\n");
    out.push_str("binlog_format=ROW\n");
    out.push_str("default_storage_engine=InnoDB\n");
    out.push_str("innodb_autoinc_lock_mode=2\n");
    out.push_str("bind-address=0.0.0.0\n");
    out.push('\n');
    out.push_str("[galera]\n");
    out.push_str("wsrep_on=ON\n");
    out.push_str(&format!("wsrep_provider={}\n", WSREP_PROVIDER));
    out.push_str(&format!(
        "wsrep_cluster_name={}\n",
        option_string(&db.cluster_name)
    ));
    out.push_str(&format!(
        "wsrep_cluster_address={}\n",
        option_string(&cluster_address(config))
    ));
    out.push_str(&format!(
        "wsrep_node_address={}\n",
        option_string(&net.host_ip)
    ));
    out.push_str(&format!("wsrep_node_name={}\n", option_string(&net.host_ip)));
    out.push_str("wsrep_sst_method=mariabackup\n");
    out.push_str(&format!(
        "wsrep_sst_auth={}\n",
        option_string(&format!(
            "{}:{}",
            super::sql::SST_USER,
            db.sst_password.expose()
        ))
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigKey;
    use crate::provision::settings::{sample_config, sample_values};

    #[test]
    fn test_cluster_address() {
        assert_eq!(
            cluster_address(&sample_config()),
            "gcomm://10.0.0.2,10.0.0.3,10.0.0.4"
        );
    }

    #[test]
    fn test_cluster_address_without_peers() {
        let values = sample_values().with(ConfigKey::PeerIps, "");
        let config = ProvisionConfig::from_values(&values).unwrap();
        assert_eq!(cluster_address(&config), "gcomm://10.0.0.2");
    }

    #[test]
    fn test_cluster_address_passes_empty_entries_through() {
        let values = sample_values().with(ConfigKey::PeerIps, "10.0.0.3,");
        let config = ProvisionConfig::from_values(&values).unwrap();
        assert_eq!(cluster_address(&config), "gcomm://10.0.0.2,10.0.0.3,");
    }

    #[test]
    fn test_render_sample() {
        let cnf = render(&sample_config());
        assert!(cnf.contains("wsrep_cluster_address=\"gcomm://10.0.0.2,10.0.0.3,10.0.0.4\"\n"));
        assert!(cnf.contains("wsrep_cluster_name=\"proxy_cluster\"\n"));
        assert!(cnf.contains("wsrep_node_address=\"10.0.0.2\"\n"));
        assert!(cnf.contains("wsrep_sst_auth=\"mariabackup:sstpw\"\n"));
        assert!(cnf.find("[mysqld]").unwrap() < cnf.find("[galera]").unwrap());
    }
}
