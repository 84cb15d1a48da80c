//! Testing infrastructure for fluentgen.
//!
//! - **[`PlanInterpreter`]**: runs generated members against a
//!   [`RecordingDelegate`], so wrapper behavior can be checked without a Java
//!   toolchain
//! - **Fixtures**: source types used across the test suite
//! - **Assertion macros**: `assert_result_ok!`, `assert_error_code!`, `assert_plan_shape!`
//!
//! # Example
//!
//! ```rust
//! use fluentgen::planner::GenerationPlanner;
//! use fluentgen::testkit::{fixtures, PlanInterpreter, RecordingDelegate, Returned, Value};
//!
//! let plan = GenerationPlanner::default().plan(&fixtures::point());
//! let mut interp = PlanInterpreter::new(&plan);
//! let id = interp.wrap(RecordingDelegate::default()).unwrap();
//!
//! assert_eq!(interp.invoke(id, "x", vec![Value::Int(1)]).unwrap(), Returned::Wrapper(id));
//! assert_eq!(interp.delegate(id).unwrap().calls[0].method, "setX");
//! ```

pub mod assertions;
pub mod fixtures;
pub mod interpreter;

pub use interpreter::{
    DelegateCall, InterpretError, PlanInterpreter, RecordingDelegate, Returned, Value, WrapperId,
};
