//! Wire payloads shared by the screens and the network layer.

use serde::{Deserialize, Serialize};

/// Response envelope every endpoint answers with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BaseInfo<D> {
    #[serde(rename = "errNo", default)]
    pub err_no: i32,
    #[serde(rename = "exeTime", default)]
    pub exe_time: i64,
    #[serde(default)]
    pub msg: String,
    pub result: D,
}

impl<D> BaseInfo<D> {
    pub fn is_success(&self) -> bool {
        self.err_no == 0
    }
}

/// Splash advert. Only `info_url` drives the UI; `jump_url` is kept for
/// the ad-tap hook.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MainAdEntity {
    #[serde(default)]
    pub info_url: String,
    #[serde(default)]
    pub jump_url: String,
}

/// One selectable subject. Also the shape persisted as the last selection.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Specialty {
    pub specialty_id: String,
    #[serde(default)]
    pub specialty_name: String,
}

impl Specialty {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            specialty_id: id.into(),
            specialty_name: name.into(),
        }
    }

    /// A stored selection with an empty id counts as no selection.
    pub fn is_selected(&self) -> bool {
        !self.specialty_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advert_envelope_decodes() {
        let json = r#"{
            "errNo": 0,
            "exeTime": 12,
            "msg": "ok",
            "result": { "info_url": "http://img/ad.png", "jump_url": "http://x" }
        }"#;
        let info: BaseInfo<MainAdEntity> = serde_json::from_str(json).unwrap();
        assert!(info.is_success());
        assert_eq!(info.result.info_url, "http://img/ad.png");
    }

    #[test]
    fn missing_envelope_fields_default() {
        let json = r#"{ "result": [{ "specialty_id": "7" }] }"#;
        let info: BaseInfo<Vec<Specialty>> = serde_json::from_str(json).unwrap();
        assert!(info.is_success());
        assert_eq!(info.msg, "");
        assert_eq!(info.result, vec![Specialty::new("7", "")]);
    }

    #[test]
    fn nonzero_err_no_is_failure() {
        let json = r#"{ "errNo": 40001, "msg": "bad sign", "result": {} }"#;
        let info: BaseInfo<MainAdEntity> = serde_json::from_str(json).unwrap();
        assert!(!info.is_success());
    }

    #[test]
    fn empty_id_is_not_a_selection() {
        assert!(!Specialty::new("", "Maths").is_selected());
        assert!(Specialty::new("S1", "Maths").is_selected());
    }
}
