use std::fmt;
use std::io::{self, BufRead, Write};

const MODULE_PROMPT: &str = "Project module (e.g. github.com/go-jimu/project): ";
const BINARY_PROMPT: &str = "Binary file name (e.g. app): ";

/// Answers gathered for a single scaffolding run.
///
/// Fields are private so the record cannot change once validated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectSettings {
    module: String,
    binary_name: String,
}

impl ProjectSettings {
    pub fn new(
        module: impl Into<String>,
        binary_name: impl Into<String>,
    ) -> Result<Self, SettingsError> {
        let module = module.into();
        let binary_name = binary_name.into();
        validate_module(&module)?;
        validate_binary_name(&binary_name)?;
        Ok(Self {
            module,
            binary_name,
        })
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn binary_name(&self) -> &str {
        &self.binary_name
    }
}

impl fmt::Display for ProjectSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "module={}, binary={}", self.module, self.binary_name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("module path must not be empty")]
    EmptyModule,
    #[error("binary file name must not be empty")]
    EmptyBinaryName,
    #[error("prompt I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Answers supplied on the command line; any `None` is prompted for.
#[derive(Clone, Debug, Default)]
pub struct Presets {
    pub module: Option<String>,
    pub binary_name: Option<String>,
    pub assume_yes: bool,
}

#[derive(Debug, Eq, PartialEq)]
pub enum Confirmation {
    Accepted(ProjectSettings),
    Declined,
}

/// Prompt for the module, the binary name and a final confirmation.
///
/// Each answer is validated as soon as it is read, so an empty module stops
/// the run before the binary name is asked for.
pub fn collect<R, W>(
    input: &mut R,
    output: &mut W,
    presets: Presets,
) -> Result<Confirmation, SettingsError>
where
    R: BufRead,
    W: Write,
{
    let module = match presets.module {
        Some(module) => module,
        None => prompt(input, output, MODULE_PROMPT)?,
    };
    validate_module(&module)?;

    let binary_name = match presets.binary_name {
        Some(name) => name,
        None => prompt(input, output, BINARY_PROMPT)?,
    };
    let settings = ProjectSettings::new(module, binary_name)?;

    if presets.assume_yes {
        return Ok(Confirmation::Accepted(settings));
    }

    let label = format!("Confirm settings ({settings}), press Y to continue: ");
    let answer = prompt(input, output, &label)?;
    if is_affirmative(&answer) {
        Ok(Confirmation::Accepted(settings))
    } else {
        Ok(Confirmation::Declined)
    }
}

fn prompt<R, W>(input: &mut R, output: &mut W, label: &str) -> Result<String, SettingsError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}")?;
    output.flush()?;
    let mut buf = String::new();
    input.read_line(&mut buf)?;
    let line = buf.strip_suffix('\n').unwrap_or(&buf);
    Ok(line.strip_suffix('\r').unwrap_or(line).to_owned())
}

fn is_affirmative(answer: &str) -> bool {
    answer.to_lowercase().starts_with('y')
}

fn validate_module(module: &str) -> Result<(), SettingsError> {
    if module.is_empty() {
        return Err(SettingsError::EmptyModule);
    }
    Ok(())
}

fn validate_binary_name(name: &str) -> Result<(), SettingsError> {
    if name.is_empty() {
        return Err(SettingsError::EmptyBinaryName);
    }
    Ok(())
}
