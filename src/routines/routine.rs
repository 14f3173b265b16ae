use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutineError {
    #[error("Routine failed: {0}")]
    RoutineFailure(String),
}

pub type RoutineResult = error_stack::Result<(), RoutineError>;

#[async_trait::async_trait]
pub trait Routine {
    fn name(&self) -> &str;

    async fn run(&self) -> RoutineResult;
}
