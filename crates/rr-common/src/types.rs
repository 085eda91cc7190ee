use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Fallback shown when the service reports a failure without a message
/// (or with a non-JSON body).
pub const GENERIC_FAILURE_MESSAGE: &str = "Erreur lors de la génération du rapport";

/// The five report sections a user can request. Advisory only: the service
/// decides what it actually includes, and rendering is driven by the
/// response content, not by these flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    #[serde(default)]
    pub name: bool,
    #[serde(default)]
    pub interfaces: bool,
    #[serde(default)]
    pub load: bool,
    #[serde(default)]
    pub encryption: bool,
    #[serde(default, rename = "blockedResources")]
    pub blocked_resources: bool,
}

/// Full request body POSTed to the report service.
/// Invariant: `domains_to_block` contains no empty or whitespace-only
/// strings (see [`crate::domains::parse_domain_list`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub host: String,
    pub login: String,
    pub password: String,
    pub options: ReportOptions,
    pub domains_to_block: Vec<String>,
}

/// RouterOS API values arrive as strings: a counter can be a JSON number,
/// a numeric string, or the literal `"N/A"`. Anything un-parseable is
/// treated as absent.
fn parse_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn count_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(parse_count(&value).unwrap_or(0))
}

fn opt_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(parse_count(&value))
}

/// A single router interface as reported by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouterInterface {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub mac_address: String,
    pub running: bool,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub rx_byte: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub rx_packet: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub tx_byte: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub tx_packet: u64,
}

/// Security profile of one wireless interface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WirelessSecurity {
    pub name: String,
    pub authentication: String,
    pub encryption: String,
}

/// One drop rule currently installed on the router.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockedResource {
    pub dst_address: String,
    #[serde(default)]
    pub comment: String,
}

/// Outcome of a single domain-block attempt. The service historically
/// reports success as `blocked`, hence the alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStatus {
    #[serde(alias = "blocked")]
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockingOutcome {
    pub domain: String,
    #[serde(default)]
    pub ip: Option<String>,
    pub status: BlockStatus,
    #[serde(default)]
    pub message: Option<String>,
}

/// Diagnostic report. Every field is optional: the service only includes
/// the keys the user requested (and that the router answered for), and the
/// renderer only shows sections whose key is present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Vec<RouterInterface>>,
    #[serde(
        default,
        deserialize_with = "opt_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub cpu_load: Option<u64>,
    #[serde(
        default,
        deserialize_with = "opt_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub memory_usage: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption: Option<Vec<WirelessSecurity>>,
    #[serde(
        default,
        rename = "blockedResources",
        skip_serializing_if = "Option::is_none"
    )]
    pub blocked_resources: Option<Vec<BlockedResource>>,
}

/// The report sections, in their fixed rendering order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportSection {
    Identity,
    Interfaces,
    SystemLoad,
    Encryption,
    BlockedResources,
}

impl Report {
    /// Assemble a report from a JSON object one section at a time: a
    /// malformed section drops only itself, the others still render.
    /// A non-object value yields an empty report.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };
        let section = |key: &str| map.get(key).cloned();
        Report {
            name: section("name").and_then(|v| serde_json::from_value(v).ok()),
            model: section("model").and_then(|v| serde_json::from_value(v).ok()),
            interfaces: section("interfaces").and_then(|v| serde_json::from_value(v).ok()),
            cpu_load: section("cpu_load").as_ref().and_then(parse_count),
            memory_usage: section("memory_usage").as_ref().and_then(parse_count),
            encryption: section("encryption").and_then(|v| serde_json::from_value(v).ok()),
            blocked_resources: section("blockedResources")
                .and_then(|v| serde_json::from_value(v).ok()),
        }
    }

    /// Sections present in this report, in rendering order.
    ///
    /// Gating is key-presence, not truthiness: an empty `interfaces` list
    /// still yields its section, and a genuine 0% CPU reading yields the
    /// system-load section.
    pub fn sections(&self) -> Vec<ReportSection> {
        let gates: [(bool, ReportSection); 5] = [
            (self.name.is_some(), ReportSection::Identity),
            (self.interfaces.is_some(), ReportSection::Interfaces),
            (self.cpu_load.is_some(), ReportSection::SystemLoad),
            (self.encryption.is_some(), ReportSection::Encryption),
            (self.blocked_resources.is_some(), ReportSection::BlockedResources),
        ];
        gates
            .into_iter()
            .filter(|(present, _)| *present)
            .map(|(_, section)| section)
            .collect()
    }
}

/// Successful transition payload handed from the form to the report page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportPayload {
    #[serde(default)]
    pub report: Report,
    #[serde(default, rename = "blockedResults")]
    pub blocked_results: Vec<BlockingOutcome>,
}

/// Discriminated result of one report generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ReportResponse {
    Success(ReportPayload),
    Failure { message: String },
}

impl ReportResponse {
    /// Classify a service response body.
    ///
    /// Any non-2xx status is a failure regardless of body shape, as is a
    /// 2xx body carrying `status: "error"`. The failure message comes from
    /// the body when present, otherwise a generic fallback. A success body
    /// degrades per section: a missing or malformed section is not an
    /// error, it simply does not render.
    pub fn from_service_body(http_ok: bool, body: serde_json::Value) -> Self {
        let reported_error = body
            .get("status")
            .and_then(|s| s.as_str())
            .map(|s| s == "error")
            .unwrap_or(false);

        if !http_ok || reported_error {
            let message = body
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(GENERIC_FAILURE_MESSAGE)
                .to_string();
            return ReportResponse::Failure { message };
        }

        let report = body
            .get("report")
            .cloned()
            .map(Report::from_value)
            .unwrap_or_default();
        let blocked_results = body
            .get("blockedResults")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();
        ReportResponse::Success(ReportPayload {
            report,
            blocked_results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = ReportRequest {
            host: "192.168.88.1".into(),
            login: "admin".into(),
            password: "".into(),
            options: ReportOptions::default(),
            domains_to_block: vec![],
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["host"], "192.168.88.1");
        assert_eq!(body["options"]["name"], false);
        assert_eq!(body["options"]["blockedResources"], false);
        assert_eq!(body["domains_to_block"], json!([]));
    }

    #[test]
    fn test_sparse_report_deserialization() {
        let report: Report = serde_json::from_str(r#"{"name":"R1","model":"M1"}"#).unwrap();
        assert_eq!(report.name.as_deref(), Some("R1"));
        assert_eq!(report.model.as_deref(), Some("M1"));
        assert!(report.interfaces.is_none());
        assert!(report.cpu_load.is_none());
    }

    #[test]
    fn test_block_status_accepts_legacy_blocked() {
        let outcome: BlockingOutcome = serde_json::from_value(json!({
            "domain": "ads.example.com",
            "ip": "93.184.216.34",
            "status": "blocked",
            "message": "ok"
        }))
        .unwrap();
        assert_eq!(outcome.status, BlockStatus::Success);

        let outcome: BlockingOutcome = serde_json::from_value(json!({
            "domain": "bad.example.com",
            "status": "error",
            "message": "timeout"
        }))
        .unwrap();
        assert_eq!(outcome.status, BlockStatus::Error);
        assert!(outcome.ip.is_none());
    }

    #[test]
    fn test_empty_report_has_no_sections() {
        assert!(Report::default().sections().is_empty());
    }

    #[test]
    fn test_identity_only() {
        let report = Report {
            name: Some("R1".into()),
            model: Some("M1".into()),
            ..Default::default()
        };
        assert_eq!(report.sections(), vec![ReportSection::Identity]);
    }

    #[test]
    fn test_empty_interfaces_list_still_present() {
        let report = Report {
            interfaces: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(report.sections(), vec![ReportSection::Interfaces]);
    }

    #[test]
    fn test_zero_cpu_load_still_present() {
        let report = Report {
            cpu_load: Some(0),
            memory_usage: Some(1024),
            ..Default::default()
        };
        assert_eq!(report.sections(), vec![ReportSection::SystemLoad]);
    }

    #[test]
    fn test_full_report_section_order() {
        let report = Report {
            name: Some("R1".into()),
            model: Some("M1".into()),
            interfaces: Some(vec![]),
            cpu_load: Some(12),
            memory_usage: Some(65536),
            encryption: Some(vec![]),
            blocked_resources: Some(vec![]),
        };
        assert_eq!(
            report.sections(),
            vec![
                ReportSection::Identity,
                ReportSection::Interfaces,
                ReportSection::SystemLoad,
                ReportSection::Encryption,
                ReportSection::BlockedResources,
            ]
        );
    }

    #[test]
    fn test_service_success_body() {
        let body = json!({
            "status": "success",
            "report": {
                "interfaces": [{
                    "name": "eth0",
                    "type": "ethernet",
                    "mac_address": "AA:BB:CC:DD:EE:FF",
                    "running": true,
                    "rx_byte": 100,
                    "rx_packet": 2,
                    "tx_byte": 50,
                    "tx_packet": 1
                }]
            },
            "blockedResults": []
        });
        match ReportResponse::from_service_body(true, body) {
            ReportResponse::Success(payload) => {
                let ifaces = payload.report.interfaces.unwrap();
                assert_eq!(ifaces.len(), 1);
                assert_eq!(ifaces[0].name, "eth0");
                assert!(ifaces[0].running);
                assert_eq!(ifaces[0].rx_byte, 100);
                assert!(payload.blocked_results.is_empty());
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn test_service_body_with_string_counters() {
        // RouterOS API values come through as strings
        let body = json!({
            "status": "success",
            "report": {
                "name": "MikroTik",
                "model": "RB4011",
                "cpu_load": "3",
                "interfaces": [{
                    "name": "ether1",
                    "type": "ether",
                    "mac_address": "AA:BB:CC:DD:EE:FF",
                    "running": true,
                    "rx_byte": "123456",
                    "rx_packet": "789",
                    "tx_byte": "654321",
                    "tx_packet": "987"
                }]
            },
            "blockedResults": []
        });
        match ReportResponse::from_service_body(true, body) {
            ReportResponse::Success(payload) => {
                assert_eq!(payload.report.name.as_deref(), Some("MikroTik"));
                assert_eq!(payload.report.cpu_load, Some(3));
                let ifaces = payload.report.interfaces.unwrap();
                assert_eq!(ifaces[0].rx_byte, 123456);
                assert_eq!(ifaces[0].rx_packet, 789);
                assert_eq!(ifaces[0].tx_byte, 654321);
                assert_eq!(ifaces[0].tx_packet, 987);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn test_na_load_drops_only_its_section() {
        let body = json!({
            "status": "success",
            "report": {
                "name": "R1",
                "model": "M1",
                "cpu_load": "N/A",
                "memory_usage": "N/A"
            }
        });
        match ReportResponse::from_service_body(true, body) {
            ReportResponse::Success(payload) => {
                assert_eq!(payload.report.sections(), vec![ReportSection::Identity]);
                assert!(payload.report.cpu_load.is_none());
                assert!(payload.report.memory_usage.is_none());
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_section_drops_only_itself() {
        let body = json!({
            "status": "success",
            "report": {
                "name": "R1",
                "interfaces": 42,
                "encryption": [{
                    "name": "wlan1",
                    "authentication": "wpa2-psk",
                    "encryption": "aes-ccm"
                }]
            }
        });
        match ReportResponse::from_service_body(true, body) {
            ReportResponse::Success(payload) => {
                assert_eq!(payload.report.name.as_deref(), Some("R1"));
                assert!(payload.report.interfaces.is_none());
                assert_eq!(payload.report.encryption.as_ref().map(Vec::len), Some(1));
                assert_eq!(
                    payload.report.sections(),
                    vec![ReportSection::Identity, ReportSection::Encryption]
                );
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn test_service_error_body() {
        let body = json!({ "status": "error", "message": "auth failed" });
        assert_eq!(
            ReportResponse::from_service_body(false, body),
            ReportResponse::Failure {
                message: "auth failed".into()
            }
        );
    }

    #[test]
    fn test_non_2xx_without_message_falls_back() {
        assert_eq!(
            ReportResponse::from_service_body(false, serde_json::Value::Null),
            ReportResponse::Failure {
                message: GENERIC_FAILURE_MESSAGE.into()
            }
        );
    }

    #[test]
    fn test_2xx_with_error_status_is_failure() {
        let body = json!({ "status": "error", "message": "connexion refusée" });
        assert!(matches!(
            ReportResponse::from_service_body(true, body),
            ReportResponse::Failure { .. }
        ));
    }

    #[test]
    fn test_malformed_success_body_degrades() {
        let body = json!({ "status": "success", "report": 42 });
        match ReportResponse::from_service_body(true, body) {
            ReportResponse::Success(payload) => {
                assert_eq!(payload, ReportPayload::default());
            }
            other => panic!("expected success, got {other:?}"),
        }
    }
}
