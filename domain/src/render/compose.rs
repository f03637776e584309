//! Compose manifest: a MariaDB Galera node and the reverse proxy.
//!
//! The proxy only declares `depends_on`; it does not wait for the
//! database to accept connections and relies on its restart policy.

use super::escape::yaml_string;
use super::{GALERA_CONF_DIR, INIT_SQL_DIR, StackLayout};
use crate::provision::settings::ProvisionConfig;

pub const DB_IMAGE: &str = "mariadb:11.4";
pub const PROXY_IMAGE: &str = "jc21/nginx-proxy-manager:latest";
pub const DB_SERVICE: &str = "db";
pub const PROXY_SERVICE: &str = "app";
pub const NETWORK: &str = "proxy";
pub const DATA_VOLUME: &str = "db_data";

/// Galera replication (4567, also UDP), IST (4568) and SST (4444).
const GALERA_PORTS: [&str; 4] = ["4444:4444", "4567:4567", "4567:4567/udp", "4568:4568"];
const PROXY_PORTS: [&str; 3] = ["80:80", "81:81", "443:443"];

pub fn render(config: &ProvisionConfig, layout: &StackLayout) -> String {
    let db = &config.database;
    let proxy = &config.proxy;

    let db_env = [
        ("MARIADB_ROOT_PASSWORD", db.root_password.expose().to_string()),
        ("MARIADB_DATABASE", db.name.clone()),
        ("MARIADB_USER", db.user.clone()),
        ("MARIADB_PASSWORD", db.user_password.expose().to_string()),
    ];
    let mut db_ports = vec![format!("{}:3306", db.port)];
    db_ports.extend(GALERA_PORTS.iter().map(|p| p.to_string()));
    let db_volumes = [
        format!("{}:/var/lib/mysql", DATA_VOLUME),
        format!("./{}:/etc/mysql/conf.d:ro", GALERA_CONF_DIR),
        format!("./{}:/docker-entrypoint-initdb.d:ro", INIT_SQL_DIR),
    ];

    let proxy_env = [
        ("PUID", proxy.puid.clone()),
        ("PGID", proxy.pgid.clone()),
        ("DB_MYSQL_HOST", DB_SERVICE.to_string()),
        ("DB_MYSQL_PORT", "3306".to_string()),
        ("DB_MYSQL_USER", db.user.clone()),
        ("DB_MYSQL_PASSWORD", db.user_password.expose().to_string()),
        ("DB_MYSQL_NAME", db.name.clone()),
    ];
    let proxy_ports: Vec<String> = PROXY_PORTS.iter().map(|p| p.to_string()).collect();
    let proxy_volumes = [
        format!("{}:/data", layout.app_data_dir.display()),
        format!("{}:/etc/letsencrypt", proxy.letsencrypt_dir),
    ];

    let mut out = String::new();
    out.push_str("# Generated by ha-provision.\n");
    out.push_str("services:\n");

    service_header(&mut out, DB_SERVICE, DB_IMAGE);
    env_block(&mut out, &db_env);
    list_block(&mut out, "ports", &db_ports);
    list_block(&mut out, "volumes", &db_volumes);
    list_block(&mut out, "networks", &[NETWORK]);

    out.push('\n');
    service_header(&mut out, PROXY_SERVICE, PROXY_IMAGE);
    list_block(&mut out, "depends_on", &[DB_SERVICE]);
    env_block(&mut out, &proxy_env);
    list_block(&mut out, "ports", &proxy_ports);
    list_block(&mut out, "volumes", &proxy_volumes);
    list_block(&mut out, "networks", &[NETWORK]);

    out.push('\n');
    out.push_str("volumes:\n");
    out.push_str(&format!("  {}:\n", DATA_VOLUME));
    out.push('\n');
    out.push_str("networks:\n");
    out.push_str(&format!("  {}:\n", NETWORK));
    out.push_str("    driver: bridge\n");
    out
}

fn service_header(out: &mut String, name: &str, image: &str) {
    out.push_str(&format!("  {}:\n", name));
    out.push_str(&format!("    image: {}\n", yaml_string(image)));
    out.push_str("    restart: unless-stopped\n");
}

fn env_block(out: &mut String, vars: &[(&str, String)]) {
    out.push_str("    environment:\n");
    for (name, value) in vars {
        out.push_str(&format!("      {}: {}\n", name, yaml_string(value)));
    }
}

fn list_block<S: AsRef<str>>(out: &mut String, name: &str, items: &[S]) {
    out.push_str(&format!("    {}:\n", name));
    for item in items {
        out.push_str(&format!("      - {}\n", yaml_string(item.as_ref())));
    }
}
