use crate::tag::tag_enum;

tag_enum! {
    /// Kind of logic, I/O, memory, or clock-distribution site hosted at a
    /// fabric coordinate.
    ///
    /// Tags mirror the legacy fabric numbering and are stable; see
    /// [`SiteKind::tag`].
    pub enum SiteKind("site kind") {
        Neutral = 0 => "NEUTRAL",
        Clb = 1 => "CLB",
        // edge terminators
        TTerm = 2 => "TTERM",
        LTerm = 3 => "LTERM",
        BTerm = 4 => "BTERM",
        RTerm = 5 => "RTERM",
        // corner terminators
        TlTerm = 6 => "TLTERM",
        LtTerm = 7 => "LTTERM",
        LbTerm = 8 => "LBTERM",
        BlTerm = 9 => "BLTERM",
        BrTerm = 10 => "BRTERM",
        RbTerm = 11 => "RBTERM",
        RtTerm = 12 => "RTTERM",
        TrTerm = 13 => "TRTERM",
        // terminators above and below the block RAM columns
        TTermBram = 14 => "TTERMBRAM",
        BTermBram = 15 => "BTERMBRAM",
        // I/O interconnect
        TIoi = 16 => "TIOI",
        LIoi = 17 => "LIOI",
        BIoi = 18 => "BIOI",
        RIoi = 19 => "RIOI",
        TIoiBram = 20 => "TIOIBRAM",
        BIoiBram = 21 => "BIOIBRAM",
        // block RAM column: RAM proper and the attached multiplier
        Bram = 22 => "BRAM",
        Bm = 23 => "BM",
        // corner blocks
        Tl = 24 => "TL",
        Bl = 25 => "BL",
        Br = 26 => "BR",
        Tr = 27 => "TR",
        // center block
        M = 28 => "M",
        // clock distribution
        ClkT = 29 => "CLKT",
        ClkB = 30 => "CLKB",
        Gclkc = 31 => "GCLKC",
        Gclkh = 32 => "GCLKH",
        GclkhBram = 33 => "GCLKHBRAM",
    }
}

impl SiteKind {
    pub fn is_term(self) -> bool {
        matches!(
            self,
            Self::TTerm
                | Self::LTerm
                | Self::BTerm
                | Self::RTerm
                | Self::TlTerm
                | Self::LtTerm
                | Self::LbTerm
                | Self::BlTerm
                | Self::BrTerm
                | Self::RbTerm
                | Self::RtTerm
                | Self::TrTerm
                | Self::TTermBram
                | Self::BTermBram
        )
    }

    pub fn is_ioi(self) -> bool {
        matches!(
            self,
            Self::TIoi
                | Self::LIoi
                | Self::BIoi
                | Self::RIoi
                | Self::TIoiBram
                | Self::BIoiBram
        )
    }
}
