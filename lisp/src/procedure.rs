use crate::builtin::Builtin;
use crate::eval::EvalErr;
use crate::value::Value;

/// Something that can sit in the head of a form.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Procedure {
    Builtin(Builtin),
}

impl Procedure {
    pub fn name(&self) -> &'static str {
        match self {
            Procedure::Builtin(b) => b.symbol(),
        }
    }

    pub fn call(&self, args: &[Value]) -> Result<Value, EvalErr> {
        tracing::trace!(procedure = self.name(), ?args, "apply");
        match self {
            Procedure::Builtin(b) => b.apply(args),
        }
    }
}
