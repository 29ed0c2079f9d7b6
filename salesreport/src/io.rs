use clap::Args;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};

// Commands that turn one document into another share this notion of input and output.
#[derive(Args)]
pub struct IOArgs {
    /// The dataset JSON file ("-" implies stdin)
    #[arg(value_parser = clap::value_parser!(PathOrStd))]
    input: PathOrStd,

    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
    output: PathOrStd,
}

impl IOArgs {
    pub fn read(&self) -> anyhow::Result<Box<dyn Read>> {
        self.input.reader()
    }

    pub fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        self.output.writer()
    }

    pub fn output(&self) -> &PathOrStd {
        &self.output
    }
}

/// A file path, or "-" for the matching standard stream
#[derive(Clone, Debug, PartialEq)]
pub enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl PathOrStd {
    pub fn reader(&self) -> anyhow::Result<Box<dyn Read>> {
        match self {
            Self::Path(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            Self::Std => Ok(Box::new(stdin().lock())),
        }
    }

    pub fn writer(&self) -> anyhow::Result<Box<dyn Write>> {
        match self {
            Self::Path(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            Self::Std => Ok(Box::new(stdout().lock())),
        }
    }

    pub fn extension(&self) -> Option<&str> {
        match self {
            Self::Path(path) => path.extension(),
            Self::Std => None,
        }
        .and_then(|ext| ext.to_str())
    }
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}
