use serde::{Deserialize, Serialize};

use crate::config::PLACEHOLDER;

/// WiFi mode reported by the device.
///
/// The device reports `"AP"` while it hosts its own access point; any other
/// value means it is a client of an existing network.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum DeviceMode {
    AccessPoint,
    #[default]
    Station,
}

impl DeviceMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::AccessPoint => "Access Point",
            Self::Station => "Station",
        }
    }
}

impl From<String> for DeviceMode {
    fn from(mode: String) -> Self {
        if mode == "AP" {
            Self::AccessPoint
        } else {
            Self::Station
        }
    }
}

impl From<DeviceMode> for String {
    fn from(mode: DeviceMode) -> Self {
        match mode {
            DeviceMode::AccessPoint => "AP".to_string(),
            DeviceMode::Station => "STA".to_string(),
        }
    }
}

/// Body of `GET /status`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub connected: bool,
    pub mode: DeviceMode,
    pub ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,
}

/// Connection indicator dot. Exactly one state at a time.
///
/// The serialized name is the CSS class the shell puts on the dot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Indicator {
    Connected,
    #[default]
    Disconnected,
}

impl Indicator {
    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }
}

impl From<bool> for Indicator {
    fn from(connected: bool) -> Self {
        if connected {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }
}

/// Rendered status fields, painted verbatim by the shell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusView {
    pub status_text: String,
    pub indicator: Indicator,
    pub mode: String,
    pub ip: String,
    pub ssid: String,
    pub rssi: String,
}

impl Default for StatusView {
    fn default() -> Self {
        let indicator = Indicator::default();
        Self {
            status_text: indicator.label().to_string(),
            indicator,
            mode: PLACEHOLDER.to_string(),
            ip: PLACEHOLDER.to_string(),
            ssid: PLACEHOLDER.to_string(),
            rssi: PLACEHOLDER.to_string(),
        }
    }
}

impl From<&StatusSnapshot> for StatusView {
    fn from(snapshot: &StatusSnapshot) -> Self {
        let indicator = Indicator::from(snapshot.connected);
        Self {
            status_text: indicator.label().to_string(),
            indicator,
            mode: snapshot.mode.label().to_string(),
            ip: snapshot.ip.clone(),
            ssid: format_ssid(snapshot.ssid.as_deref()),
            rssi: format_rssi(snapshot.rssi),
        }
    }
}

/// SSID or placeholder when absent or empty
pub fn format_ssid(ssid: Option<&str>) -> String {
    match ssid {
        Some(ssid) if !ssid.is_empty() => ssid.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `"<value> dBm"`, or placeholder when absent. A reading of 0 means the
/// device has no signal measurement.
pub fn format_rssi(rssi: Option<i32>) -> String {
    match rssi {
        Some(value) if value != 0 => format!("{value} dBm"),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod snapshot_parsing {
        use super::*;

        #[test]
        fn parses_full_station_body() {
            let snapshot: StatusSnapshot = serde_json::from_str(
                r#"{"connected":true,"mode":"STA","ip":"192.168.1.42","ssid":"MyWiFi","rssi":-67}"#,
            )
            .unwrap();

            assert!(snapshot.connected);
            assert_eq!(snapshot.mode, DeviceMode::Station);
            assert_eq!(snapshot.ip, "192.168.1.42");
            assert_eq!(snapshot.ssid.as_deref(), Some("MyWiFi"));
            assert_eq!(snapshot.rssi, Some(-67));
        }

        #[test]
        fn optional_fields_may_be_missing_or_null() {
            let snapshot: StatusSnapshot = serde_json::from_str(
                r#"{"connected":false,"mode":"AP","ip":"192.168.4.1","rssi":null}"#,
            )
            .unwrap();

            assert_eq!(snapshot.mode, DeviceMode::AccessPoint);
            assert_eq!(snapshot.ssid, None);
            assert_eq!(snapshot.rssi, None);
        }

        #[test]
        fn missing_required_field_is_an_error() {
            let parsed = serde_json::from_str::<StatusSnapshot>(r#"{"connected":true,"mode":"AP"}"#);
            assert!(parsed.is_err());
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn access_point_snapshot() {
            let view = StatusView::from(&StatusSnapshot {
                connected: false,
                mode: DeviceMode::AccessPoint,
                ip: "192.168.4.1".to_string(),
                ssid: None,
                rssi: None,
            });

            assert_eq!(view.status_text, "Disconnected");
            assert_eq!(view.indicator, Indicator::Disconnected);
            assert_eq!(view.mode, "Access Point");
            assert_eq!(view.ip, "192.168.4.1");
            assert_eq!(view.ssid, "--");
            assert_eq!(view.rssi, "--");
        }

        #[test]
        fn station_snapshot() {
            let view = StatusView::from(&StatusSnapshot {
                connected: true,
                mode: DeviceMode::Station,
                ip: "10.0.0.7".to_string(),
                ssid: Some("MyWiFi".to_string()),
                rssi: Some(-67),
            });

            assert_eq!(view.status_text, "Connected");
            assert_eq!(view.indicator, Indicator::Connected);
            assert_eq!(view.mode, "Station");
            assert_eq!(view.ssid, "MyWiFi");
            assert_eq!(view.rssi, "-67 dBm");
        }

        #[test]
        fn empty_ssid_and_zero_rssi_render_placeholder() {
            assert_eq!(format_ssid(Some("")), "--");
            assert_eq!(format_rssi(Some(0)), "--");
        }

        #[test]
        fn unknown_mode_strings_are_station() {
            for mode in ["STA", "", "ap", "APSTA"] {
                assert_eq!(DeviceMode::from(mode.to_string()), DeviceMode::Station);
            }
        }

        #[test]
        fn indicator_serializes_as_dot_class() {
            assert_eq!(
                serde_json::to_string(&Indicator::Connected).unwrap(),
                r#""connected""#
            );
            assert_eq!(
                serde_json::to_string(&Indicator::Disconnected).unwrap(),
                r#""disconnected""#
            );
        }
    }
}
