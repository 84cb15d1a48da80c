//! Executes generation plans without compiling generated source.
//!
//! The interpreter gives plan bodies the meaning the rendered Java has:
//! factories build a new [`RecordingDelegate`] and wrap it, wrapper methods
//! record the delegate calls they make and return the receiving instance.
//! Tests compare those recordings with calls made directly on a delegate.

use crate::planner::{GeneratedKind, GeneratedMember, GenerationPlan, Statement};
use std::collections::HashMap;
use thiserror::Error;

/// Argument value passed to generated members
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

/// One call made on a delegate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateCall {
    pub method: String,
    pub argument: Value,
}

/// Stand-in for a source type instance; its state is the calls it received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingDelegate {
    pub constructed_with: Vec<Value>,
    pub calls: Vec<DelegateCall>,
}

impl RecordingDelegate {
    /// What the source constructor would have built
    pub fn constructed(arguments: Vec<Value>) -> Self {
        Self {
            constructed_with: arguments,
            calls: Vec::new(),
        }
    }

    /// Call a source method directly
    pub fn call(&mut self, method: &str, argument: Value) {
        self.calls.push(DelegateCall {
            method: method.to_string(),
            argument,
        });
    }

    pub fn calls_to<'a>(&'a self, method: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.calls
            .iter()
            .filter(move |c| c.method == method)
            .map(|c| &c.argument)
    }
}

/// Identity of a wrapper instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WrapperId(usize);

/// Result of invoking a generated member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returned {
    Wrapper(WrapperId),
    /// The delegate of the given wrapper
    Delegate(WrapperId),
    Nothing,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterpretError {
    #[error("no member {name} accepting {arity} argument(s)")]
    NoSuchMember { name: String, arity: usize },
    #[error("unknown wrapper instance")]
    NoSuchInstance,
    #[error("name '{0}' is not bound")]
    Unbound(String),
    #[error("'{0}' is not a varargs parameter")]
    NotVarargs(String),
    #[error("static member {0} has no receiver")]
    NoReceiver(String),
}

#[derive(Debug, Clone)]
enum Binding {
    One(Value),
    Many(Vec<Value>),
}

/// Runs members of one plan against recording delegates
#[derive(Debug)]
pub struct PlanInterpreter<'p> {
    plan: &'p GenerationPlan,
    instances: Vec<RecordingDelegate>,
}

impl<'p> PlanInterpreter<'p> {
    pub fn new(plan: &'p GenerationPlan) -> Self {
        Self {
            plan,
            instances: Vec::new(),
        }
    }

    pub fn delegate(&self, id: WrapperId) -> Result<&RecordingDelegate, InterpretError> {
        self.instances.get(id.0).ok_or(InterpretError::NoSuchInstance)
    }

    /// Wrap an existing delegate through the hidden constructor
    pub fn wrap(&mut self, delegate: RecordingDelegate) -> Result<WrapperId, InterpretError> {
        let plan: &'p GenerationPlan = self.plan;
        let constructor = plan
            .members_of(GeneratedKind::HiddenConstructor)
            .next()
            .ok_or_else(|| InterpretError::NoSuchMember {
                name: "<init>".to_string(),
                arity: 1,
            })?;
        let id = WrapperId(self.instances.len());
        self.instances.push(RecordingDelegate::default());
        for statement in &constructor.body {
            if let Statement::AssignField { .. } = statement {
                self.instances[id.0] = delegate.clone();
            }
        }
        Ok(id)
    }

    fn resolve(
        &self,
        name: &str,
        arity: usize,
        statics: bool,
    ) -> Result<&'p GeneratedMember, InterpretError> {
        let plan: &'p GenerationPlan = self.plan;
        plan.members
            .iter()
            .filter(|m| !m.kind.is_field() && !m.kind.is_constructor() && m.name == name)
            .filter(|m| (m.kind == GeneratedKind::Factory) == statics)
            .find(|m| match m.parameters.as_slice() {
                [only] if only.varargs => true,
                params => params.len() == arity,
            })
            .ok_or_else(|| InterpretError::NoSuchMember {
                name: name.to_string(),
                arity,
            })
    }

    fn bind(member: &GeneratedMember, arguments: Vec<Value>) -> HashMap<String, Binding> {
        let mut env = HashMap::new();
        match member.parameters.as_slice() {
            [only] if only.varargs => {
                env.insert(only.name.clone(), Binding::Many(arguments));
            }
            params => {
                for (param, value) in params.iter().zip(arguments) {
                    env.insert(param.name.clone(), Binding::One(value));
                }
            }
        }
        env
    }

    /// Call a static factory
    pub fn call_static(&mut self, name: &str, arguments: Vec<Value>) -> Result<Returned, InterpretError> {
        let member = self.resolve(name, arguments.len(), true)?;
        let env = Self::bind(member, arguments);
        self.execute(None, member, env)
    }

    /// Call an instance method on `receiver`
    pub fn invoke(
        &mut self,
        receiver: WrapperId,
        name: &str,
        arguments: Vec<Value>,
    ) -> Result<Returned, InterpretError> {
        self.delegate(receiver)?;
        let member = self.resolve(name, arguments.len(), false)?;
        let env = Self::bind(member, arguments);
        self.execute(Some(receiver), member, env)
    }

    fn execute(
        &mut self,
        receiver: Option<WrapperId>,
        member: &GeneratedMember,
        mut env: HashMap<String, Binding>,
    ) -> Result<Returned, InterpretError> {
        let this = || receiver.ok_or_else(|| InterpretError::NoReceiver(member.name.clone()));
        let single = |env: &HashMap<String, Binding>, name: &str| match env.get(name) {
            Some(Binding::One(v)) => Ok(v.clone()),
            _ => Err(InterpretError::Unbound(name.to_string())),
        };

        for statement in &member.body {
            match statement {
                Statement::AssignField { parameter } => {
                    return Err(InterpretError::Unbound(parameter.clone()));
                }
                Statement::ReturnField => return Ok(Returned::Delegate(this()?)),
                Statement::DelegateCall { method, argument } => {
                    let value = single(&env, argument)?;
                    self.instances[this()?.0].call(method, value);
                }
                Statement::DelegateCallInLoop {
                    method,
                    variable,
                    parameter,
                    ..
                } => {
                    let values = match env.get(parameter) {
                        Some(Binding::Many(values)) => values.clone(),
                        _ => return Err(InterpretError::NotVarargs(parameter.clone())),
                    };
                    let id = this()?;
                    for value in values {
                        env.insert(variable.clone(), Binding::One(value));
                        let current = single(&env, variable)?;
                        self.instances[id.0].call(method, current);
                    }
                }
                Statement::ConstructAndWrap { arguments } => {
                    let values = arguments
                        .iter()
                        .map(|a| single(&env, a))
                        .collect::<Result<Vec<_>, _>>()?;
                    let id = self.wrap(RecordingDelegate::constructed(values))?;
                    return Ok(Returned::Wrapper(id));
                }
                Statement::ReturnSelf => return Ok(Returned::Wrapper(this()?)),
                Statement::ReturnSelfInvocation { method, argument } => {
                    return self.invoke(this()?, method, vec![Value::Bool(*argument)]);
                }
            }
        }
        Ok(Returned::Nothing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConstructorDescriptor, MethodDescriptor, PrimitiveType, SourceType, TypeRef};
    use crate::planner::GenerationPlanner;

    fn plan() -> GenerationPlan {
        let int = TypeRef::Primitive(PrimitiveType::Int);
        GenerationPlanner::default().plan(
            &SourceType::new("a.Box")
                .with_constructor(ConstructorDescriptor::new([int.clone()]))
                .with_method(MethodDescriptor::new("setSize", [int.clone()]))
                .with_method(MethodDescriptor::new("addItem", [int])),
        )
    }

    #[test]
    fn test_factory_then_chain() {
        let plan = plan();
        let mut interp = PlanInterpreter::new(&plan);
        let Returned::Wrapper(id) = interp.call_static("box", vec![Value::Int(3)]).unwrap() else {
            panic!("factory must return a wrapper");
        };
        assert_eq!(interp.invoke(id, "size", vec![Value::Int(5)]).unwrap(), Returned::Wrapper(id));
        assert_eq!(
            interp.invoke(id, "addItems", vec![Value::Int(1), Value::Int(2)]).unwrap(),
            Returned::Wrapper(id)
        );

        let delegate = interp.delegate(id).unwrap();
        assert_eq!(delegate.constructed_with, vec![Value::Int(3)]);
        assert_eq!(delegate.calls.len(), 3);
        assert_eq!(interp.invoke(id, "get", vec![]).unwrap(), Returned::Delegate(id));
    }

    #[test]
    fn test_unknown_member() {
        let plan = plan();
        let mut interp = PlanInterpreter::new(&plan);
        let id = interp.wrap(RecordingDelegate::default()).unwrap();
        let err = interp.invoke(id, "size", vec![]).unwrap_err();
        assert_eq!(
            err,
            InterpretError::NoSuchMember {
                name: "size".into(),
                arity: 0
            }
        );
    }
}
