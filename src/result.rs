use log::error;
use nested_error::EvalError;

/// Everything the binary prints. `stdout` is what the functions returned,
/// errors go to stderr.
#[derive(Default)]
pub struct DemoOutput {
    stdout: Vec<String>,
    errors: Vec<EvalError>,
}

impl DemoOutput {
    pub fn new() -> Self {
        DemoOutput {
            stdout: vec![],
            errors: vec![],
        }
    }

    pub fn dump_to_stdout(&mut self, message: String) {
        self.stdout.push(message);
    }

    pub fn push_error(&mut self, error: EvalError) {
        error!("{}", error.kind.msg());
        self.errors.push(error);
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn stdout_lines(&self) -> &[String] {
        &self.stdout
    }

    pub fn errors(&self) -> &[EvalError] {
        &self.errors
    }

    pub fn concat_errors(&self) -> String {
        self.errors.iter().map(
            |e| e.render_error()
        ).collect::<Vec<String>>().join("\n\n")
    }

    pub fn concat_results(&self) -> (String, String) {  // (stdout, stderr)
        (self.stdout.join("\n"), self.concat_errors())
    }

    pub fn concat_and_dump_results(&self) {
        let (stdout, stderr) = self.concat_results();

        if !stdout.is_empty() {
            println!("{stdout}");
        }

        if !stderr.is_empty() {
            eprintln!("{stderr}");
        }
    }
}
