//! OSRM dataset preparation (download + preprocess) for integration tests.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

/// Geofabrik extract identified by its region path,
/// e.g. "north-america/us/nevada".
#[derive(Debug, Clone)]
pub struct Extract {
    region: String,
}

impl Extract {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.region.rsplit('/').next().unwrap_or("region")
    }

    pub fn download_url(&self) -> String {
        format!("https://download.geofabrik.de/{}-latest.osm.pbf", self.region)
    }
}

#[derive(Debug)]
pub enum PrepError {
    Io(io::Error),
    Http(reqwest::Error),
    Docker(String),
}

impl From<io::Error> for PrepError {
    fn from(err: io::Error) -> Self {
        PrepError::Io(err)
    }
}

impl From<reqwest::Error> for PrepError {
    fn from(err: reqwest::Error) -> Self {
        PrepError::Http(err)
    }
}

/// On-disk dataset ready for `osrm-routed` in MLD mode.
#[derive(Debug, Clone)]
pub struct PreparedDataset {
    pub data_dir: PathBuf,
    pub graph_base: PathBuf,
}

impl PreparedDataset {
    /// Downloads and preprocesses the extract unless already present.
    pub fn ensure(extract: &Extract, data_root: impl AsRef<Path>) -> Result<Self, PrepError> {
        let data_root = data_root.as_ref();
        let data_root = if data_root.is_absolute() {
            data_root.to_path_buf()
        } else {
            std::env::current_dir()?.join(data_root)
        };
        let data_dir = data_root.join(extract.name());
        fs::create_dir_all(&data_dir)?;

        let pbf_path = data_dir.join(format!("{}-latest.osm.pbf", extract.name()));
        if !pbf_path.exists() {
            info!(url = %extract.download_url(), "downloading extract");
            download(&extract.download_url(), &pbf_path)?;
        }

        let graph_base = data_dir.join(format!("{}-latest.osrm", extract.name()));
        if !graph_base.exists() {
            osrm_backend(
                &[
                    "osrm-extract",
                    "-p",
                    "/opt/car.lua",
                    &format!("/data/{}", file_name(&pbf_path)),
                ],
                &data_dir,
            )?;
        }

        if !mld_ready(&graph_base) {
            osrm_backend(
                &["osrm-partition", &format!("/data/{}", file_name(&graph_base))],
                &data_dir,
            )?;
            osrm_backend(
                &["osrm-customize", &format!("/data/{}", file_name(&graph_base))],
                &data_dir,
            )?;
        }

        Ok(Self {
            data_dir,
            graph_base,
        })
    }
}

fn download(url: &str, dest: &Path) -> Result<(), PrepError> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let tmp_path = dest.with_extension("tmp");
    let mut writer = BufWriter::new(File::create(&tmp_path)?);
    writer.write_all(&response.bytes()?)?;
    writer.flush()?;
    fs::rename(tmp_path, dest)?;
    Ok(())
}

fn mld_ready(graph_base: &Path) -> bool {
    graph_base.exists()
        && ["osrm.partition", "osrm.mldgr", "osrm.cells"]
            .iter()
            .all(|ext| graph_base.with_extension(ext).exists())
}

fn osrm_backend(args: &[&str], data_dir: &Path) -> Result<(), PrepError> {
    info!(?args, "running osrm-backend");
    let status = Command::new("docker")
        .arg("run")
        .arg("--rm")
        .arg("-t")
        .arg("-v")
        .arg(format!("{}:/data", data_dir.display()))
        .arg("osrm/osrm-backend")
        .args(args)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(PrepError::Docker(format!(
            "docker exited with status {}",
            status
        )))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}
