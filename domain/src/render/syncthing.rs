//! Syncthing config: this device, its peers and the two shared folders.
//!
//! Syncthing ignores folder-level device references to devices missing from
//! the top level, so every peer is declared there as well.

use super::StackLayout;
use super::escape::xml_attr;
use crate::provision::peer_list::PeerList;
use crate::provision::settings::ProvisionConfig;

const CONFIG_VERSION: u32 = 37;

/// A two-way synced directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncFolder {
    pub id: &'static str,
    pub path: String,
    pub rescan_interval_s: u32,
}

/// Proxy data and certificates, in that order.
pub fn folders(config: &ProvisionConfig, layout: &StackLayout) -> [SyncFolder; 2] {
    let rescan_interval_s = config.sync.rescan_interval_s;
    [
        SyncFolder {
            id: "npm-data",
            path: layout.app_data_dir.display().to_string(),
            rescan_interval_s,
        },
        SyncFolder {
            id: "letsencrypt",
            path: config.proxy.letsencrypt_dir.clone(),
            rescan_interval_s,
        },
    ]
}

/// One `<folder>` block with a `<device>` entry per peer, in list order.
pub fn render_folder_block(folder: &SyncFolder, peers: &PeerList) -> String {
    let mut out = format!(
        "    <folder id=\"{id}\" label=\"{id}\" path=\"{path}\" type=\"sendreceive\" \
         rescanIntervalS=\"{rescan}\" fsWatcherEnabled=\"true\" ignorePerms=\"false\" \
         ignoreDelete=\"false\" autoNormalize=\"true\">\n",
        id = xml_attr(folder.id),
        path = xml_attr(&folder.path),
        rescan = folder.rescan_interval_s,
    );
    for peer in peers.iter() {
        out.push_str(&format!(
            "        <device id=\"{}\" introducedBy=\"\"></device>\n",
            xml_attr(peer)
        ));
    }
    out.push_str("    </folder>\n");
    out
}

/// Top-level `<device>` with dynamic address discovery.
fn render_device(id: &str, name: &str) -> String {
    format!(
        concat!(
            "    <device id=\"{}\" name=\"{}\" compression=\"metadata\" introducer=\"false\">\n",
            "        <address>dynamic</address>\n",
            "    </device>\n",
        ),
        xml_attr(id),
        xml_attr(name)
    )
}

pub fn render(config: &ProvisionConfig, layout: &StackLayout) -> String {
    let mut out = String::new();
    out.push_str(&format!("<configuration version=\"{}\">\n", CONFIG_VERSION));
    out.push_str(&render_device(&config.sync.device_id, &config.network.host_ip));
    for peer in config.sync.peer_device_ids.iter() {
        out.push_str(&render_device(peer, peer));
    }
    for folder in folders(config, layout) {
        out.push_str(&render_folder_block(&folder, &config.sync.peer_device_ids));
    }
    out.push_str("</configuration>\n");
    out
}
