use crate::pipeline::RunConfig;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Build the vulkanglTFPBR Android package and optionally install it
#[derive(Parser, Debug)]
#[command(
    name = "apkpipe",
    about = "Build the vulkanglTFPBR Android package and optionally install it",
    version,
    long_about = "apkpipe runs the Android build for vulkanglTFPBR: it checks the external \
                  submodules, generates build.xml if needed, runs ndk-build, stages the \
                  validation layers and assets, packages with ant and moves the .apk to \
                  ../bin. Optionally installs the package with adb.\n\n\
                  Examples:\n  \
                  apkpipe\n  \
                  apkpipe --validation\n  \
                  apkpipe --deploy --project-dir android"
)]
pub struct CliArgs {
    #[arg(long, help = "Install the package on a connected device")]
    pub deploy: bool,

    #[arg(long, help = "Compile with validation enabled and stage the validation layers")]
    pub validation: bool,

    #[arg(
        long,
        value_name = "DIR",
        help = "Android project directory (defaults to current directory)"
    )]
    pub project_dir: Option<PathBuf>,

    #[arg(long, help = "Print the run report as JSON on stdout")]
    pub json: bool,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Verbose output (debug level)")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

impl CliArgs {
    pub fn run_config(&self) -> RunConfig {
        RunConfig::new()
            .with_deploy(self.deploy)
            .with_validation(self.validation)
    }
}

/// Rewrites the single-dash spellings `-deploy` and `-validation` to their long forms.
///
/// Only the full words are recognised. Prefixes are not: `-d` is rejected by
/// the parser and `-v` stays the verbose switch.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-deploy") => OsString::from("--deploy"),
            Some("-validation") => OsString::from("--validation"),
            _ => arg,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["apkpipe"]);
        assert!(!args.deploy);
        assert!(!args.validation);
        assert!(args.project_dir.is_none());
        assert!(!args.json);
        assert_eq!(args.run_config(), RunConfig::default());
    }

    #[test]
    fn test_flags() {
        let args = CliArgs::parse_from(["apkpipe", "--deploy", "--validation"]);
        let run = args.run_config();
        assert!(run.deploy);
        assert!(run.validation);
    }

    #[test]
    fn test_project_dir() {
        let args = CliArgs::parse_from(["apkpipe", "--project-dir", "/src/android"]);
        assert_eq!(args.project_dir, Some(PathBuf::from("/src/android")));
    }

    #[test]
    fn test_positional_arguments_rejected() {
        assert!(CliArgs::try_parse_from(["apkpipe", "android"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(CliArgs::try_parse_from(["apkpipe", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from(["apkpipe", "--log-level", "debug"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_legacy_single_dash_flags() {
        let argv = normalize_legacy_flags(os_args(&["apkpipe", "-deploy", "-validation"]));
        let args = CliArgs::try_parse_from(argv).unwrap();
        assert!(args.deploy);
        assert!(args.validation);
    }

    #[test]
    fn test_legacy_prefixes_are_not_expanded() {
        assert!(CliArgs::try_parse_from(normalize_legacy_flags(os_args(&["apkpipe", "-d"]))).is_err());

        let args =
            CliArgs::try_parse_from(normalize_legacy_flags(os_args(&["apkpipe", "-v"]))).unwrap();
        assert!(args.verbose);
        assert!(!args.validation);
    }

    #[test]
    fn test_normalize_leaves_other_args() {
        let argv = normalize_legacy_flags(os_args(&["apkpipe", "-v", "--json"]));
        assert_eq!(argv, os_args(&["apkpipe", "-v", "--json"]));
    }
}
