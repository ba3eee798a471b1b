//! Command builder: turns a [`RougeConfig`] into the scorer's argument list
//! once, at evaluator construction. Each evaluation call only appends the
//! job-descriptor path.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::config::RougeConfig;
use crate::error::Result;
use crate::staging::absolute;

/// Cached scorer invocation: entrypoint plus every argument except the
/// per-call job-descriptor path.
#[derive(Debug, Clone)]
pub struct CommandTemplate {
    program: String,
    args: Vec<OsString>,
}

impl CommandTemplate {
    /// Build and validate the template. Flag order matches what the scorer
    /// has always been invoked with:
    /// `<script> -e <data> -a -n <N> [-2 4 -u] [-x] [-w <weight>]
    /// [-l <len>|-b <len>] [-m] [-s] [-c <cf>] -f <A|B> [-r <samples>]
    /// [-p <alpha>]`.
    pub fn new(config: &RougeConfig) -> Result<Self> {
        config.validate()?;

        let mut args: Vec<OsString> = Vec::new();
        args.push(absolute(&config.rouge_path)?.into_os_string());
        args.push("-e".into());
        args.push(absolute(&config.data_path)?.into_os_string());
        args.push("-a".into());
        args.push("-n".into());
        args.push(config.n_gram.to_string().into());

        if config.rouge_su4 {
            args.extend(["-2".into(), "4".into(), "-u".into()]);
        }
        if !config.rouge_l {
            args.push("-x".into());
        }
        if config.rouge_w {
            args.push("-w".into());
            args.push(config.rouge_w_weight.to_string().into());
        }
        if config.length_limit {
            args.push(config.length_unit.flag().into());
            args.push(config.length.to_string().into());
        }
        if config.stemming {
            args.push("-m".into());
        }
        if config.stopwords {
            args.push("-s".into());
        }
        if config.confidence_interval {
            args.push("-c".into());
            args.push(config.confidence.to_string().into());
        }
        args.push("-f".into());
        args.push(config.scoring_formula.flag().into());
        if config.resampling {
            args.push("-r".into());
            args.push(config.samples.to_string().into());
        }
        if config.balance {
            args.push("-p".into());
            args.push(config.alpha.to_string().into());
        }

        let template = Self { program: config.entrypoint.clone(), args };
        debug!(argv = ?template.argv(), "cached scorer command template");
        Ok(template)
    }

    /// The full invocation for one job descriptor.
    pub fn command(&self, job_file: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.arg(job_file);
        cmd
    }

    /// Program plus cached arguments, for logging and inspection.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().map(|a| a.to_string_lossy().into_owned()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LengthUnit, ScoringFormula};
    use crate::error::RougeError;

    fn base_config() -> RougeConfig {
        RougeConfig::new("/opt/ROUGE/ROUGE-1.5.5.pl", "/opt/ROUGE/data")
    }

    #[test]
    fn default_config_produces_the_expected_argv() {
        let template = CommandTemplate::new(&base_config()).unwrap();
        assert_eq!(
            template.argv(),
            vec![
                "perl",
                "/opt/ROUGE/ROUGE-1.5.5.pl",
                "-e",
                "/opt/ROUGE/data",
                "-a",
                "-n",
                "2",
                "-2",
                "4",
                "-u",
                "-x",
                "-l",
                "100",
                "-m",
                "-f",
                "A",
                "-r",
                "1000",
                "-p",
                "0.5",
            ]
        );
    }

    #[test]
    fn rouge_l_enabled_drops_the_x_flag() {
        let mut config = base_config();
        config.rouge_l = true;
        let argv = CommandTemplate::new(&config).unwrap().argv();
        assert!(!argv.contains(&"-x".to_string()));
    }

    #[test]
    fn rouge_w_adds_weight() {
        let mut config = base_config();
        config.rouge_w = true;
        let argv = CommandTemplate::new(&config).unwrap().argv();
        let pos = argv.iter().position(|a| a == "-w").unwrap();
        assert_eq!(argv[pos + 1], "1.2");
    }

    #[test]
    fn byte_level_limit_uses_b() {
        let mut config = base_config();
        config.length_unit = LengthUnit::Bytes;
        config.length = 665;
        let argv = CommandTemplate::new(&config).unwrap().argv();
        let pos = argv.iter().position(|a| a == "-b").unwrap();
        assert_eq!(argv[pos + 1], "665");
        assert!(!argv.contains(&"-l".to_string()));
    }

    #[test]
    fn best_formula_selects_f_b() {
        let mut config = base_config();
        config.scoring_formula = "anything-but-average".parse::<ScoringFormula>().unwrap();
        let argv = CommandTemplate::new(&config).unwrap().argv();
        let pos = argv.iter().position(|a| a == "-f").unwrap();
        assert_eq!(argv[pos + 1], "B");
    }

    #[test]
    fn confidence_interval_and_stopwords_flags() {
        let mut config = base_config();
        config.confidence_interval = true;
        config.confidence = 90;
        config.stopwords = true;
        let argv = CommandTemplate::new(&config).unwrap().argv();
        let pos = argv.iter().position(|a| a == "-c").unwrap();
        assert_eq!(argv[pos + 1], "90");
        assert!(argv.contains(&"-s".to_string()));
    }

    #[test]
    fn invalid_configs_are_rejected_at_template_time() {
        let mut config = base_config();
        config.n_gram = 0;
        assert!(matches!(CommandTemplate::new(&config), Err(RougeError::Config(_))));

        let mut config = base_config();
        config.length = 0;
        assert!(matches!(CommandTemplate::new(&config), Err(RougeError::Config(_))));
    }

    #[test]
    fn command_appends_the_job_descriptor_path() {
        let template = CommandTemplate::new(&base_config()).unwrap();
        let cmd = template.command(Path::new("/tmp/stage/config.xml"));
        let last = cmd.get_args().last().unwrap();
        assert_eq!(last, "/tmp/stage/config.xml");
        assert_eq!(cmd.get_program(), "perl");
    }
}
