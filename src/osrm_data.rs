//! Local OSRM dataset preparation (download + preprocess).
//!
//! Fetches a Geofabrik extract and runs the MLD pipeline through the
//! `osrm/osrm-backend` image so integration tests can route against a
//! local `osrm-routed` instead of the public demo server.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

const OSRM_IMAGE: &str = "osrm/osrm-backend";

#[derive(Debug, Clone)]
pub struct GeofabrikRegion {
    /// Geofabrik region path, e.g. "north-america/us/illinois".
    pub path: String,
}

impl GeofabrikRegion {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or("region")
    }

    pub fn url(&self) -> String {
        format!("https://download.geofabrik.de/{}-latest.osm.pbf", self.path)
    }
}

#[derive(Debug, Clone)]
pub struct OsrmDatasetConfig {
    pub region: GeofabrikRegion,
    pub data_root: PathBuf,
    /// Lua profile inside the OSRM image.
    pub profile: String,
}

impl OsrmDatasetConfig {
    pub fn new(region: GeofabrikRegion, data_root: impl Into<PathBuf>) -> Self {
        Self {
            region,
            data_root: data_root.into(),
            profile: "/opt/car.lua".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmDataset {
    pub data_dir: PathBuf,
    pub osrm_base: PathBuf,
    pub pbf_path: PathBuf,
}

impl OsrmDataset {
    /// Name of the `.osrm` base file, as seen from inside the container at `/data`.
    pub fn container_path(&self) -> String {
        format!("/data/{}", file_name(&self.osrm_base))
    }

    /// Downloads and preprocesses the region unless the artifacts already exist.
    pub fn ensure(config: &OsrmDatasetConfig) -> Result<Self, OsrmDataError> {
        let data_root = if config.data_root.is_absolute() {
            config.data_root.clone()
        } else {
            std::env::current_dir()?.join(&config.data_root)
        };
        let region = config.region.name();
        let data_dir = data_root.join(region);
        fs::create_dir_all(&data_dir)?;

        let pbf_path = data_dir.join(format!("{}-latest.osm.pbf", region));
        let osrm_base = data_dir.join(format!("{}-latest.osrm", region));
        let dataset = Self {
            data_dir,
            osrm_base,
            pbf_path,
        };

        if !dataset.pbf_path.exists() {
            info!(url = %config.region.url(), "downloading extract");
            download(&config.region.url(), &dataset.pbf_path)?;
        }

        if !dataset.osrm_base.exists() {
            let pbf = format!("/data/{}", file_name(&dataset.pbf_path));
            dataset.run(&["osrm-extract", "-p", &config.profile, &pbf])?;
        }

        if !dataset.mld_ready() {
            let base = dataset.container_path();
            dataset.run(&["osrm-partition", &base])?;
            dataset.run(&["osrm-customize", &base])?;
        }

        Ok(dataset)
    }

    fn mld_ready(&self) -> bool {
        ["osrm.partition", "osrm.mldgr", "osrm.cells"]
            .iter()
            .all(|extension| self.osrm_base.with_extension(extension).exists())
    }

    fn run(&self, args: &[&str]) -> Result<(), OsrmDataError> {
        info!(step = args[0], "running OSRM preprocessing");
        let status = Command::new("docker")
            .args(["run", "--rm", "-t", "-v"])
            .arg(format!("{}:/data", self.data_dir.display()))
            .arg(OSRM_IMAGE)
            .args(args)
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(OsrmDataError::ProcessFailure(format!(
                "{} exited with status {}",
                args[0], status
            )))
        }
    }
}

#[derive(Debug)]
pub enum OsrmDataError {
    Io(io::Error),
    Http(reqwest::Error),
    ProcessFailure(String),
}

impl fmt::Display for OsrmDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsrmDataError::Io(err) => write!(f, "io error: {}", err),
            OsrmDataError::Http(err) => write!(f, "download failed: {}", err),
            OsrmDataError::ProcessFailure(detail) => write!(f, "preprocessing failed: {}", detail),
        }
    }
}

impl std::error::Error for OsrmDataError {}

impl From<io::Error> for OsrmDataError {
    fn from(err: io::Error) -> Self {
        OsrmDataError::Io(err)
    }
}

impl From<reqwest::Error> for OsrmDataError {
    fn from(err: reqwest::Error) -> Self {
        OsrmDataError::Http(err)
    }
}

/// Writes to a temporary sibling first so a partial download never looks complete.
fn download(url: &str, dest: &Path) -> Result<(), OsrmDataError> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let tmp_path = dest.with_extension("tmp");
    let mut writer = BufWriter::new(File::create(&tmp_path)?);
    writer.write_all(&response.bytes()?)?;
    writer.flush()?;
    fs::rename(tmp_path, dest)?;
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}
