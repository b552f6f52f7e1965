use serde::{Deserialize, Serialize};

use crate::tag::tag_enum;

tag_enum! {
    /// Geometric direction a routing wire travels, as read off its name.
    pub enum WireDir("wire direction") {
        Neutral = 0 => "NEUTRAL",
        N = 1 => "N",
        WN = 2 => "WN",
        NW = 3 => "NW",
        W = 4 => "W",
        WS = 5 => "WS",
        SW = 6 => "SW",
        S = 7 => "S",
        SE = 8 => "SE",
        ES = 9 => "ES",
        E = 10 => "E",
        EN = 11 => "EN",
        NE = 12 => "NE",
        // vertical clock spine
        DN = 13 => "DN",
        UP = 14 => "UP",
    }
}

impl core::ops::Not for WireDir {
    type Output = WireDir;
    fn not(self) -> WireDir {
        match self {
            WireDir::Neutral => WireDir::Neutral,
            WireDir::N => WireDir::S,
            WireDir::WN => WireDir::ES,
            WireDir::NW => WireDir::SE,
            WireDir::W => WireDir::E,
            WireDir::WS => WireDir::EN,
            WireDir::SW => WireDir::NE,
            WireDir::S => WireDir::N,
            WireDir::SE => WireDir::NW,
            WireDir::ES => WireDir::WN,
            WireDir::E => WireDir::W,
            WireDir::EN => WireDir::WS,
            WireDir::NE => WireDir::SW,
            WireDir::DN => WireDir::UP,
            WireDir::UP => WireDir::DN,
        }
    }
}

tag_enum! {
    /// Position of a wire segment along its logical span, used to stitch
    /// multi-segment wires into continuous paths.
    pub enum WireSituation("wire situation") {
        Neutral = 0 => "NEUTRAL",
        Beg = 1 => "BEG",
        A = 2 => "A",
        B = 3 => "B",
        Mid = 4 => "MID",
        C = 5 => "C",
        D = 6 => "D",
        End = 7 => "END",
    }
}

tag_enum! {
    /// Electrical/functional role of a routing wire; orthogonal to
    /// direction and situation.
    pub enum WireKind("wire kind") {
        Neutral = 0 => "NEUTRAL",
        // general interconnect
        Double = 1 => "DOUBLE",
        Hex = 2 => "HEX",
        Omux = 3 => "OMUX",
        // slice control inputs and their pinwires
        Bx = 4 => "BX",
        By = 5 => "BY",
        BxPinwire = 6 => "BX_PINWIRE",
        ByPinwire = 7 => "BY_PINWIRE",
        Ce = 8 => "CE",
        Cin = 9 => "CIN",
        Clk = 10 => "CLK",
        Cout = 11 => "COUT",
        Dx = 12 => "DX",
        Dy = 13 => "DY",
        // LUT inputs
        F1 = 14 => "F1",
        F2 = 15 => "F2",
        F3 = 16 => "F3",
        F4 = 17 => "F4",
        F1Pinwire = 18 => "F1_PINWIRE",
        F2Pinwire = 19 => "F2_PINWIRE",
        F3Pinwire = 20 => "F3_PINWIRE",
        F4Pinwire = 21 => "F4_PINWIRE",
        // wide-function muxes
        F5 = 22 => "F5",
        Fx = 23 => "FX",
        Fxina = 24 => "FXINA",
        Fxinb = 25 => "FXINB",
        G1 = 26 => "G1",
        G2 = 27 => "G2",
        G3 = 28 => "G3",
        G4 = 29 => "G4",
        G1Pinwire = 30 => "G1_PINWIRE",
        G2Pinwire = 31 => "G2_PINWIRE",
        G3Pinwire = 32 => "G3_PINWIRE",
        G4Pinwire = 33 => "G4_PINWIRE",
        // clock distribution
        Gclk = 34 => "GCLK",
        GclkcGclkb = 35 => "GCLKC_GCLKB",
        GclkcGclkl = 36 => "GCLKC_GCLKL",
        GclkcGclkr = 37 => "GCLKC_GCLKR",
        GclkcGclkt = 38 => "GCLKC_GCLKT",
        GclkhGclkB = 39 => "GCLKH_GCLK_B",
        GclkhGclk = 40 => "GCLKH_GCLK",
        // long lines
        Lh = 41 => "LH",
        Lv = 42 => "LV",
        // shift-register chain
        Shiftin = 43 => "SHIFTIN",
        Shiftout = 44 => "SHIFTOUT",
        Sr = 45 => "SR",
        // tri-state bus
        Tbuf = 46 => "TBUF",
        Tbus = 47 => "TBUS",
        Ti = 48 => "TI",
        Tout = 49 => "TOUT",
        Ts = 50 => "TS",
        VccPinwire = 51 => "VCC_PINWIRE",
        Wf1Pinwire = 52 => "WF1_PINWIRE",
        Wf2Pinwire = 53 => "WF2_PINWIRE",
        Wf3Pinwire = 54 => "WF3_PINWIRE",
        Wf4Pinwire = 55 => "WF4_PINWIRE",
        Wg1Pinwire = 56 => "WG1_PINWIRE",
        Wg2Pinwire = 57 => "WG2_PINWIRE",
        Wg3Pinwire = 58 => "WG3_PINWIRE",
        Wg4Pinwire = 59 => "WG4_PINWIRE",
        // slice outputs
        X = 60 => "X",
        Xb = 61 => "XB",
        Xq = 62 => "XQ",
        Y = 63 => "Y",
        Yb = 64 => "YB",
        Yq = 65 => "YQ",
    }
}

impl WireKind {
    pub fn is_pinwire(self) -> bool {
        matches!(
            self,
            Self::BxPinwire
                | Self::ByPinwire
                | Self::F1Pinwire
                | Self::F2Pinwire
                | Self::F3Pinwire
                | Self::F4Pinwire
                | Self::G1Pinwire
                | Self::G2Pinwire
                | Self::G3Pinwire
                | Self::G4Pinwire
                | Self::VccPinwire
                | Self::Wf1Pinwire
                | Self::Wf2Pinwire
                | Self::Wf3Pinwire
                | Self::Wf4Pinwire
                | Self::Wg1Pinwire
                | Self::Wg2Pinwire
                | Self::Wg3Pinwire
                | Self::Wg4Pinwire
        )
    }
}

/// Full classification of a single routing wire: the Cartesian combination
/// of the three wire axes.  Which combinations actually occur is a property
/// of a concrete fabric, not of the vocabulary; no validity rules are
/// imposed here.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct WireLabel {
    pub dir: WireDir,
    pub situation: WireSituation,
    pub kind: WireKind,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::tag::{TagOutOfRange, UnknownName};

    use super::{WireDir, WireKind, WireLabel, WireSituation};

    #[test]
    fn test_tags_dense() {
        for (i, dir) in WireDir::ALL.iter().enumerate() {
            assert_eq!(usize::from(dir.tag()), i);
        }
        for (i, situation) in WireSituation::ALL.iter().enumerate() {
            assert_eq!(usize::from(situation.tag()), i);
        }
        for (i, kind) in WireKind::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.tag()), i);
            assert_eq!(WireKind::from_tag(kind.tag()), Some(*kind));
        }
    }

    #[test]
    fn test_legacy_tags() {
        assert_eq!(WireDir::COUNT, 15);
        assert_eq!(WireDir::N.tag(), 1);
        assert_eq!(WireDir::E.tag(), 10);
        assert_eq!(WireDir::DN.tag(), 13);
        assert_eq!(WireDir::UP.tag(), 14);
        assert_eq!(WireSituation::COUNT, 8);
        assert_eq!(WireSituation::Beg.tag(), 1);
        assert_eq!(WireSituation::Mid.tag(), 4);
        assert_eq!(WireSituation::End.tag(), 7);
        assert_eq!(WireKind::COUNT, 66);
        assert_eq!(WireKind::Omux.tag(), 3);
        assert_eq!(WireKind::F1.tag(), 14);
        assert_eq!(WireKind::Gclk.tag(), 34);
        assert_eq!(WireKind::GclkhGclk.tag(), 40);
        assert_eq!(WireKind::VccPinwire.tag(), 51);
        assert_eq!(WireKind::Yq.tag(), 65);
    }

    #[test]
    fn test_round_trip_names() {
        for &dir in WireDir::ALL {
            assert_eq!(WireDir::from_name(dir.name()), Some(dir));
        }
        for &situation in WireSituation::ALL {
            assert_eq!(WireSituation::from_name(situation.name()), Some(situation));
        }
        for &kind in WireKind::ALL {
            assert_eq!(WireKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.name().parse(), Ok(kind));
        }
        assert_eq!(WireKind::get("GCLKC_GCLKB"), WireKind::GclkcGclkb);
        assert_eq!(WireKind::get("GCLKH_GCLK_B"), WireKind::GclkhGclkB);
    }

    #[test]
    fn test_opposites() {
        assert_eq!(!WireDir::N, WireDir::S);
        assert_eq!(!WireDir::W, WireDir::E);
        assert_eq!(!WireDir::WN, WireDir::ES);
        assert_eq!(!WireDir::NW, WireDir::SE);
        assert_eq!(!WireDir::WS, WireDir::EN);
        assert_eq!(!WireDir::SW, WireDir::NE);
        assert_eq!(!WireDir::DN, WireDir::UP);
        assert_eq!(!WireDir::Neutral, WireDir::Neutral);
        for &dir in WireDir::ALL {
            assert_eq!(!!dir, dir);
        }
    }

    #[test]
    fn test_neutral() {
        assert_eq!(WireDir::from_tag(0), Some(WireDir::Neutral));
        assert_eq!(WireSituation::from_tag(0), Some(WireSituation::Neutral));
        assert_eq!(WireKind::from_tag(0), Some(WireKind::Neutral));
        assert_eq!(WireKind::Neutral.name(), "NEUTRAL");
        assert!(WireKind::Neutral.is_neutral());
        assert!(!WireKind::Gclk.is_neutral());
        assert_eq!(
            WireLabel::default(),
            WireLabel {
                dir: WireDir::Neutral,
                situation: WireSituation::Neutral,
                kind: WireKind::Neutral,
            }
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(WireDir::from_tag(WireDir::COUNT as u8), None);
        assert_eq!(WireSituation::from_tag(WireSituation::COUNT as u8), None);
        assert_eq!(WireKind::from_tag(WireKind::COUNT as u8), None);
        assert_matches!(WireDir::try_from(15), Err(TagOutOfRange { tag: 15, .. }));
        assert_matches!(WireSituation::try_from(8), Err(TagOutOfRange { tag: 8, .. }));
        assert_matches!(WireKind::try_from(66), Err(TagOutOfRange { tag: 66, .. }));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(WireDir::from_name("Q"), None);
        assert_eq!(WireSituation::from_name("HALFWAY"), None);
        assert_matches!(
            "NOT_A_WIRE".parse::<WireKind>(),
            Err(UnknownName { what: "wire kind", .. })
        );
    }

    #[test]
    fn test_pinwires() {
        assert!(WireKind::BxPinwire.is_pinwire());
        assert!(WireKind::VccPinwire.is_pinwire());
        assert!(WireKind::Wg4Pinwire.is_pinwire());
        assert!(!WireKind::Bx.is_pinwire());
        assert!(!WireKind::F1.is_pinwire());
        assert!(!WireKind::Neutral.is_pinwire());
    }
}
