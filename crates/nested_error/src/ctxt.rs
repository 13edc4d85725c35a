#[derive(Clone, Debug, PartialEq)]
pub enum ErrorContext {
    Unknown,

    // name of the function
    CallingFunction(String),
    EvaluatingDemo,
}
