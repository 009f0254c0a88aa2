use crate::error::RegionError;

const DEFAULT_BASE_MINUTES: f64 = 40.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Short label, also the namespace of every artifact file name.
    pub label: String,
    pub full_name: String,
    /// Folder under the data directory holding the region's CSV exports.
    pub folder: Option<String>,
    /// Centre of the synthetic response-time distribution.
    pub base_minutes: f64,
}

struct Builtin {
    label: &'static str,
    full_name: &'static str,
    folder: Option<&'static str>,
    base_minutes: f64,
}

const BUILTIN: &[Builtin] = &[
    Builtin {
        label: "강원",
        full_name: "강원특별자치도",
        folder: Some("강원특별자치도_산악사고 데이터"),
        base_minutes: 45.0,
    },
    Builtin {
        label: "전북",
        full_name: "전북특별자치도",
        folder: Some("전북특별자치도소방본부_산악사고 구조 출동 현황"),
        base_minutes: 38.0,
    },
    Builtin {
        label: "제주",
        full_name: "제주특별자치도",
        folder: Some("제주특별자치도소방안전본부_산악사고 구조 출동 현황"),
        base_minutes: 42.0,
    },
    Builtin {
        label: "서울",
        full_name: "서울특별시",
        folder: None,
        base_minutes: 35.0,
    },
];

impl Region {
    /// Looks up a built-in region, or builds a custom one from a safe label.
    pub fn resolve(label: &str) -> Result<Self, RegionError> {
        let label = label.trim();
        validate_label(label)?;
        if let Some(b) = BUILTIN.iter().find(|b| b.label == label) {
            return Ok(b.to_region());
        }
        Ok(Self {
            label: label.to_string(),
            full_name: label.to_string(),
            folder: None,
            base_minutes: DEFAULT_BASE_MINUTES,
        })
    }

    pub fn builtin() -> Vec<Self> {
        BUILTIN.iter().map(Builtin::to_region).collect()
    }
}

impl Builtin {
    fn to_region(&self) -> Region {
        Region {
            label: self.label.to_string(),
            full_name: self.full_name.to_string(),
            folder: self.folder.map(str::to_string),
            base_minutes: self.base_minutes,
        }
    }
}

fn validate_label(label: &str) -> Result<(), RegionError> {
    if label.is_empty() {
        return Err(RegionError::Empty);
    }
    let unsafe_char = label
        .chars()
        .any(|c| c == '/' || c == '\\' || c == ':' || c.is_control());
    if unsafe_char || label.contains("..") {
        return Err(RegionError::Unsafe(label.to_string()));
    }
    Ok(())
}
