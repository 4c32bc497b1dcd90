//! The eight dock target kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where on a region a dock target sits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DockKind {
    CornerTopLeft,
    CornerTopRight,
    CornerBottomLeft,
    CornerBottomRight,
    SideTop,
    SideBottom,
    SideLeft,
    SideRight,
}

/// A marker string that names no dock kind
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid dock position: {0}")]
pub struct DockKindError(pub String);

impl DockKind {
    /// All kinds in generation order
    pub const ALL: [DockKind; 8] = [
        DockKind::CornerTopLeft,
        DockKind::CornerTopRight,
        DockKind::CornerBottomLeft,
        DockKind::CornerBottomRight,
        DockKind::SideTop,
        DockKind::SideBottom,
        DockKind::SideLeft,
        DockKind::SideRight,
    ];

    /// Marker name used in element ids and data attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            DockKind::CornerTopLeft => "corner-top-left",
            DockKind::CornerTopRight => "corner-top-right",
            DockKind::CornerBottomLeft => "corner-bottom-left",
            DockKind::CornerBottomRight => "corner-bottom-right",
            DockKind::SideTop => "side-top",
            DockKind::SideBottom => "side-bottom",
            DockKind::SideLeft => "side-left",
            DockKind::SideRight => "side-right",
        }
    }

    /// Check if this is a corner target
    #[inline]
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            DockKind::CornerTopLeft
                | DockKind::CornerTopRight
                | DockKind::CornerBottomLeft
                | DockKind::CornerBottomRight
        )
    }

    /// Check if docking here turns the element on its side
    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, DockKind::SideLeft | DockKind::SideRight)
    }
}

impl fmt::Display for DockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DockKind {
    type Err = DockKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DockKindError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_names_round_trip() {
        for kind in DockKind::ALL {
            assert_eq!(kind.as_str().parse::<DockKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_marker_rejected() {
        let err = "corner-middle".parse::<DockKind>().unwrap_err();
        assert_eq!(err, DockKindError("corner-middle".to_string()));
        assert_eq!(err.to_string(), "invalid dock position: corner-middle");
    }

    #[test]
    fn test_serde_uses_marker_names() {
        let json = serde_json::to_string(&DockKind::CornerBottomRight).unwrap();
        assert_eq!(json, "\"corner-bottom-right\"");
        let kind: DockKind = serde_json::from_str("\"side-left\"").unwrap();
        assert_eq!(kind, DockKind::SideLeft);
    }

    #[test]
    fn test_classification() {
        assert_eq!(DockKind::ALL.iter().filter(|k| k.is_corner()).count(), 4);
        let vertical: Vec<_> = DockKind::ALL.iter().filter(|k| k.is_vertical()).collect();
        assert_eq!(vertical, vec![&DockKind::SideLeft, &DockKind::SideRight]);
    }
}
