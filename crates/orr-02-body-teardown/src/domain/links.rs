//! Stock special links
//!
//! Stock bodies carry structure that is not expressed as primary-body edges.
//! The table below is keyed by stock tag; the graph resolves it to handles
//! as bodies and auxiliary objects are registered.

use serde::{Deserialize, Serialize};

/// Tag identifying a body of the host's stock solar system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockBody {
    Sun,
    SunStation,
    CaveTwin,
    TowerTwin,
    TimberHearth,
    TimberMoon,
    BrittleHollow,
    VolcanicMoon,
    GiantsDeep,
    ProbeCannon,
    DarkBramble,
    Comet,
    WhiteHole,
    WhiteHoleTarget,
    QuantumMoon,
    MapSatellite,
    RingWorld,
    DreamWorld,
}

/// Engine object removed together with a stock body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuxiliaryObject {
    TimeLoopRing,
    FocalBody,
    MapSatelliteBody,
    NomaiProbe,
    CannonMuzzle,
    FakeCannonMuzzle,
    CannonBarrel,
    FakeCannonBarrel,
    CannonDebris,
    SunStationDebris,
    BrambleIsland,
    GabbroIsland,
    QuantumIsland,
    StatueIsland,
    ConstructionYardIsland,
    WhiteholeStation,
    WhiteholeStationSuperstructure,
    MiningRig,
    BackRaft,
    SealRaft,
}

impl AuxiliaryObject {
    /// Scene object name in the stock system.
    pub fn scene_name(&self) -> &'static str {
        match self {
            Self::TimeLoopRing => "TimeLoopRing_Body",
            Self::FocalBody => "FocalBody",
            Self::MapSatelliteBody => "MapSatellite_Body",
            Self::NomaiProbe => "NomaiProbe_Body",
            Self::CannonMuzzle => "CannonMuzzle_Body",
            Self::FakeCannonMuzzle => "FakeCannonMuzzle_Body (1)",
            Self::CannonBarrel => "CannonBarrel_Body",
            Self::FakeCannonBarrel => "FakeCannonBarrel_Body (1)",
            Self::CannonDebris => "Debris_Body (1)",
            Self::SunStationDebris => "SS_Debris_Body",
            Self::BrambleIsland => "BrambleIsland_Body",
            Self::GabbroIsland => "GabbroIsland_Body",
            Self::QuantumIsland => "QuantumIsland_Body",
            Self::StatueIsland => "StatueIsland_Body",
            Self::ConstructionYardIsland => "ConstructionYardIsland_Body",
            Self::WhiteholeStation => "WhiteholeStation_Body",
            Self::WhiteholeStationSuperstructure => "WhiteholeStationSuperstructure_Body",
            Self::MiningRig => "MiningRig_Body",
            Self::BackRaft => "BackRaft_Body",
            Self::SealRaft => "SealRaft_Body",
        }
    }
}

/// Special links of one stock body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StockLinks {
    /// Stock bodies removed in cascade
    pub cascades: &'static [StockBody],
    /// Auxiliary objects deactivated with the body
    pub auxiliary: &'static [AuxiliaryObject],
}

const NONE: StockLinks = StockLinks {
    cascades: &[],
    auxiliary: &[],
};

impl StockBody {
    pub fn links(&self) -> StockLinks {
        use AuxiliaryObject::*;
        match self {
            Self::BrittleHollow => StockLinks {
                cascades: &[StockBody::WhiteHole],
                auxiliary: &[],
            },
            Self::TowerTwin => StockLinks {
                cascades: &[],
                auxiliary: &[TimeLoopRing, FocalBody],
            },
            Self::CaveTwin => StockLinks {
                cascades: &[],
                auxiliary: &[FocalBody],
            },
            Self::MapSatellite => StockLinks {
                cascades: &[],
                auxiliary: &[MapSatelliteBody],
            },
            Self::ProbeCannon => StockLinks {
                cascades: &[],
                auxiliary: &[
                    NomaiProbe,
                    CannonMuzzle,
                    FakeCannonMuzzle,
                    CannonBarrel,
                    FakeCannonBarrel,
                    CannonDebris,
                ],
            },
            Self::SunStation => StockLinks {
                cascades: &[],
                auxiliary: &[SunStationDebris],
            },
            Self::GiantsDeep => StockLinks {
                cascades: &[],
                auxiliary: &[
                    BrambleIsland,
                    GabbroIsland,
                    QuantumIsland,
                    StatueIsland,
                    ConstructionYardIsland,
                ],
            },
            Self::WhiteHole => StockLinks {
                cascades: &[],
                auxiliary: &[WhiteholeStation, WhiteholeStationSuperstructure],
            },
            Self::TimberHearth => StockLinks {
                cascades: &[],
                auxiliary: &[MiningRig],
            },
            Self::DreamWorld => StockLinks {
                cascades: &[],
                auxiliary: &[BackRaft, SealRaft],
            },
            _ => NONE,
        }
    }

    /// Whether the stock body is a star.
    pub fn is_star(&self) -> bool {
        matches!(self, Self::Sun)
    }
}
