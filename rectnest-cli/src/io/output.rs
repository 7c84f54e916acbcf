use crate::config::CliConfig;
use crate::io::{PlaceJob, SelectJob};
use rectnest::io::ext_repr::{ExtLayout, ExtSelection};
use serde::{Deserialize, Serialize};

/// Full record of a `place` run: the job echoed back, its layout and the
/// config it ran with.
#[derive(Serialize, Deserialize, Clone)]
pub struct PlaceOutput {
    #[serde(flatten)]
    pub job: PlaceJob,
    pub layout: ExtLayout,
    pub config: CliConfig,
}

/// Full record of a `select` run.
#[derive(Serialize, Deserialize, Clone)]
pub struct SelectOutput {
    #[serde(flatten)]
    pub job: SelectJob,
    pub selection: ExtSelection,
    pub config: CliConfig,
}
