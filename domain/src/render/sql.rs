//! SQL init script, run by the MariaDB entrypoint on first start.
//!
//! Every statement is safe to replay against an initialized server.

use super::escape::{sql_ident, sql_string};
use crate::provision::settings::ProvisionConfig;

/// Account used by `wsrep_sst_method=mariabackup`.
pub const SST_USER: &str = "mariabackup";

pub fn render(config: &ProvisionConfig) -> String {
    let db = &config.database;
    let database = sql_ident(&db.name);
    let user = format!("{}@'%'", sql_string(&db.user));
    let sst_user = format!("{}@'localhost'", sql_string(SST_USER));

    let mut out = String::new();
    out.push_str("-- Generated by ha-provision. Safe to run more than once.\n");
    out.push_str(&format!("CREATE DATABASE IF NOT EXISTS {};\n", database));
    out.push_str(&format!(
        "CREATE USER IF NOT EXISTS {} IDENTIFIED BY {};\n",
        user,
        sql_string(db.user_password.expose())
    ));
    out.push_str(&format!(
        "GRANT ALL PRIVILEGES ON {}.* TO {};\n",
        database, user
    ));
    out.push_str(&format!(
        "CREATE USER IF NOT EXISTS {} IDENTIFIED BY {};\n",
        sst_user,
        sql_string(db.sst_password.expose())
    ));
    out.push_str(&format!(
        "GRANT RELOAD, PROCESS, LOCK TABLES, BINLOG MONITOR ON *.* TO {};\n",
        sst_user
    ));
    out.push_str("FLUSH PRIVILEGES;\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigKey;
    use crate::provision::settings::{sample_config, sample_values};

    #[test]
    fn test_render_sample() {
        let sql = render(&sample_config());
        assert!(sql.contains("CREATE DATABASE IF NOT EXISTS `npm`;\n"));
        assert!(sql.contains("CREATE USER IF NOT EXISTS 'svc'@'%' IDENTIFIED BY 'pw';\n"));
        assert!(sql.contains("GRANT ALL PRIVILEGES ON `npm`.* TO 'svc'@'%';\n"));
        assert!(sql.contains("'mariabackup'@'localhost' IDENTIFIED BY 'sstpw'"));
        assert!(sql.ends_with("FLUSH PRIVILEGES;\n"));
    }

    #[test]
    fn test_every_create_is_guarded() {
        let sql = render(&sample_config());
        for line in sql.lines().filter(|l| l.starts_with("CREATE")) {
            assert!(line.contains("IF NOT EXISTS"), "unguarded: {}", line);
        }
        // DROP/INSERT would break replays
        assert!(!sql.contains("DROP"));
        assert!(!sql.contains("INSERT"));
    }

    #[test]
    fn test_quotes_are_escaped() {
        let values = sample_values()
            .with(ConfigKey::DbUserPass, "it's")
            .with(ConfigKey::DbName, "my`db");
        let config = ProvisionConfig::from_values(&values).unwrap();
        let sql = render(&config);
        assert!(sql.contains("IDENTIFIED BY 'it''s'"));
        assert!(sql.contains("`my``db`"));
    }
}
