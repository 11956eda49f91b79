/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::config::config_file::Config;
use anyhow::{anyhow, Error};
use dirs::home_dir;
use std::fs;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = ".config/bookr/config.toml";

pub struct Filesystem;

impl Filesystem {
	pub fn new() -> Self {
		Self
	}

	/// Opens a session script, or stdin when no path is given.
	pub fn open_input(
		&self,
		file_path: Option<&String>,
	) -> Result<Box<dyn BufRead>, Error> {
		match file_path {
			None => Ok(Box::new(BufReader::new(io::stdin()))),
			Some(p) => {
				let file = File::open(Path::new(p))
					.map_err(|e| anyhow!("failed to open {}: {}", p, e))?;
				Ok(Box::new(BufReader::new(file)))
			},
		}
	}

	/// Fetches the config from the given path, or the default path if none.
	/// A missing file at the default path just means defaults; a missing
	/// file that was asked for explicitly is an error.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match custom_config_path {
			Some(p) => PathBuf::from(p),
			None => match home_dir() {
				Some(home) => home.join(DEFAULT_CONFIG_PATH),
				None => {
					debug!("no home directory; using default config");
					return Ok(Config::default());
				},
			},
		};

		if !config_path.exists() && custom_config_path.is_none() {
			debug!(path = %config_path.display(), "no config file; using defaults");
			return Ok(Config::default());
		}

		let content = fs::read_to_string(&config_path).map_err(|e| {
			anyhow!("failed to read config {}: {}", config_path.display(), e)
		})?;
		let config: Config = toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		debug!(path = %config_path.display(), ?config, "loaded config");
		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::booking::validator::SameDayPolicy;
	use std::io::Read;

	fn scratch_file(name: &str, content: &str) -> String {
		let path = std::env::temp_dir()
			.join(format!("bookr-{}-{}", std::process::id(), name));
		fs::write(&path, content).unwrap();
		path.to_string_lossy().to_string()
	}

	#[test]
	fn test_explicit_config_is_read() {
		let path = scratch_file("strict.toml", "[booking]\nsame_day = \"reject\"\n");
		let config = Filesystem::new().get_config(Some(&path)).unwrap();
		assert_eq!(config.same_day(), SameDayPolicy::Reject);
		fs::remove_file(path).unwrap();
	}

	#[test]
	fn test_missing_explicit_config_fails() {
		let path = "/nonexistent/bookr/config.toml".to_string();
		assert!(Filesystem::new().get_config(Some(&path)).is_err());
	}

	#[test]
	fn test_malformed_config_fails() {
		let path = scratch_file("broken.toml", "[booking\n");
		let err = Filesystem::new().get_config(Some(&path)).unwrap_err();
		assert!(err.to_string().starts_with("failed to parse config"));
		fs::remove_file(path).unwrap();
	}

	#[test]
	fn test_open_input_file() {
		let path = scratch_file("script.txt", "add\nsave\n");
		let mut input = Filesystem::new().open_input(Some(&path)).unwrap();
		let mut content = String::new();
		input.read_to_string(&mut content).unwrap();
		assert_eq!(content, "add\nsave\n");
		fs::remove_file(path).unwrap();
	}
}
