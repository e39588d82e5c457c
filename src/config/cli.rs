use crate::config::toml_config::TomlConfig;
use crate::config::RemoteSettings;
use crate::domain::model::PlayRequest;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "chord-remote")]
#[command(about = "Trigger chords and notes on a remote music server")]
pub struct CliConfig {
    /// Base address of the music server [default: http://0.0.0.0:8001]
    #[arg(long, env = "CHORD_REMOTE_HOST")]
    pub host: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: PlayCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum PlayCommand {
    /// Play one or more chords, e.g. `chord CEG_C`
    Chord {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Play one or more notes, e.g. `note A --octave 4`
    Note {
        #[arg(required = true)]
        names: Vec<String>,

        #[arg(long, allow_negative_numbers = true)]
        octave: Option<i32>,
    },
}

impl CliConfig {
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }

    /// 設定優先順序：旗標 > 設定檔 > 預設值
    pub fn resolve(&self, file: Option<&TomlConfig>) -> RemoteSettings {
        let mut settings = file.map(TomlConfig::to_settings).unwrap_or_default();
        if let Some(host) = &self.host {
            settings.base_url = host.clone();
        }
        if let Some(seconds) = self.timeout_secs {
            settings.timeout_seconds = Some(seconds);
        }
        settings
    }

    pub fn requests(&self) -> Vec<PlayRequest> {
        match &self.command {
            PlayCommand::Chord { names } => names.iter().map(PlayRequest::chord).collect(),
            PlayCommand::Note { names, octave } => names
                .iter()
                .map(|name| match octave {
                    Some(octave) => PlayRequest::note_in_octave(name, *octave),
                    None => PlayRequest::note(name),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Action;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("chord-remote").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_chord_subcommand() {
        let cli = parse(&["chord", "CEG_C", "DFA_D"]);
        let requests = cli.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.action == Action::PlayChord));
        assert_eq!(requests[1].identifier, "DFA_D");
    }

    #[test]
    fn test_note_with_octave() {
        let cli = parse(&["note", "A", "--octave", "4"]);
        assert_eq!(cli.requests(), vec![PlayRequest::note("A/4")]);
    }

    #[test]
    fn test_chord_requires_name() {
        assert!(CliConfig::try_parse_from(["chord-remote", "chord"]).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            "[remote]\nbase_url = \"http://from-file:8001\"\ntimeout_seconds = 2\n",
        )
        .unwrap();

        let cli = parse(&["--host", "http://from-flag:8001", "note", "C"]);
        let settings = cli.resolve(Some(&file));
        assert_eq!(settings.base_url, "http://from-flag:8001");
        assert_eq!(settings.timeout_seconds, Some(2));
    }
}
