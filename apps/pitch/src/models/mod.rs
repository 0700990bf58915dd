pub mod pitch;

pub use pitch::{
    Challenge, Company, Icp, PitchContent, RawCompany, RawIcp, RawList, RawPitchConfig,
    ThemeConfig,
};
