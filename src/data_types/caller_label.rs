
use serde::Serialize;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// The label assigned to a caller output file.
/// Labels are finer grained than the tools themselves, e.g. Strelka writes separate SNV and indel files.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, AsRefStr, EnumIter, EnumString, Serialize, strum_macros::Display)]
pub enum CallerLabel {
    #[strum(serialize = "muse")]
    #[serde(rename = "muse")]
    Muse,
    #[strum(serialize = "mutect2")]
    #[serde(rename = "mutect2")]
    Mutect2,
    #[strum(serialize = "somaticsniper")]
    #[serde(rename = "somaticsniper")]
    SomaticSniper,
    #[strum(serialize = "strelka-indel")]
    #[serde(rename = "strelka-indel")]
    StrelkaIndel,
    #[strum(serialize = "strelka-snp")]
    #[serde(rename = "strelka-snp")]
    StrelkaSnp,
    #[strum(serialize = "varscan-snp")]
    #[serde(rename = "varscan-snp")]
    VarscanSnp,
    #[strum(serialize = "varscan-indel")]
    #[serde(rename = "varscan-indel")]
    VarscanIndel,
}

impl CallerLabel {
    /// Returns the tool that writes outputs with this label
    pub fn family(&self) -> CallerFamily {
        match self {
            CallerLabel::Muse => CallerFamily::Muse,
            CallerLabel::Mutect2 => CallerFamily::Mutect,
            CallerLabel::SomaticSniper => CallerFamily::SomaticSniper,
            CallerLabel::StrelkaIndel |
            CallerLabel::StrelkaSnp => CallerFamily::Strelka,
            CallerLabel::VarscanSnp |
            CallerLabel::VarscanIndel => CallerFamily::Varscan,
        }
    }
}

/// The variant calling tool, ignoring which of its output files we are looking at
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, AsRefStr, EnumIter, EnumString, Serialize, strum_macros::Display)]
pub enum CallerFamily {
    #[strum(serialize = "muse")]
    #[serde(rename = "muse")]
    Muse,
    #[strum(serialize = "mutect")]
    #[serde(rename = "mutect")]
    Mutect,
    #[strum(serialize = "somaticsniper")]
    #[serde(rename = "somaticsniper")]
    SomaticSniper,
    #[strum(serialize = "strelka")]
    #[serde(rename = "strelka")]
    Strelka,
    #[strum(serialize = "varscan")]
    #[serde(rename = "varscan")]
    Varscan,
}
