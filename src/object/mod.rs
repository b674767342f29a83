use crate::ast;
use crate::environment::Environment;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FromIterator;
use std::rc::Rc;

mod eval_error;
pub use eval_error::EvalError;

pub type Result<T> = std::result::Result<T, EvalError>;

pub type NativeFn = fn(Vec<RuntimeVal>, &Environment) -> Result<RuntimeVal>;

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeVal {
    Null,
    Boolean(bool),
    Number(f64),
    Object(ObjectValue),
    NativeFunction(NativeFunction),
    Function(FunctionValue),
}

impl Display for RuntimeVal {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::Object(obj) => write!(f, "{}", obj),
            Self::NativeFunction(func) => write!(f, "{}", func),
            Self::Function(func) => write!(f, "{}", func),
        }
    }
}

impl From<f64> for RuntimeVal {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for RuntimeVal {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<ObjectValue> for RuntimeVal {
    fn from(obj: ObjectValue) -> Self {
        Self::Object(obj)
    }
}

impl From<NativeFunction> for RuntimeVal {
    fn from(func: NativeFunction) -> Self {
        Self::NativeFunction(func)
    }
}

impl From<FunctionValue> for RuntimeVal {
    fn from(func: FunctionValue) -> Self {
        Self::Function(func)
    }
}

impl RuntimeVal {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::Object(_) => "object",
            Self::NativeFunction(_) => "native-fn",
            Self::Function(_) => "function",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectValue {
    pub properties: HashMap<String, RuntimeVal>,
}

impl ObjectValue {
    pub fn get(&self, key: &str) -> Option<&RuntimeVal> {
        self.properties.get(key)
    }
}

impl FromIterator<(String, RuntimeVal)> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = (String, RuntimeVal)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

impl Display for ObjectValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.properties.is_empty() {
            return write!(f, "{{}}");
        }

        let mut pairs: Vec<String> = self
            .properties
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect();
        pairs.sort();

        write!(f, "{{ {} }}", pairs.join(", "))
    }
}

#[derive(Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub func: NativeFn,
}

impl NativeFunction {
    pub fn new(name: &'static str, func: NativeFn) -> Self {
        Self { name, func }
    }

    pub fn call(&self, args: Vec<RuntimeVal>, env: &Environment) -> Result<RuntimeVal> {
        (self.func)(args, env)
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Debug for NativeFunction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}

impl Display for NativeFunction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}

#[derive(Clone)]
pub struct FunctionValue {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Vec<ast::Statement>,
    pub env: Rc<RefCell<Environment>>,
}

// The captured environment may hold this very function, so it is compared by identity.
impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.parameters == other.parameters
            && self.body == other.body
            && Rc::ptr_eq(&self.env, &other.env)
    }
}

impl Debug for FunctionValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish()
    }
}

impl Display for FunctionValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "fn {}({})", self.name, self.parameters.join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn answer(_args: Vec<RuntimeVal>, _env: &Environment) -> Result<RuntimeVal> {
        Ok(42.0.into())
    }

    #[test]
    fn test_display() {
        let object: ObjectValue = vec![
            ("b".to_owned(), RuntimeVal::Number(2.0)),
            ("a".to_owned(), RuntimeVal::Number(0.5)),
            ("c".to_owned(), RuntimeVal::Null),
        ]
        .into_iter()
        .collect();

        let function = FunctionValue {
            name: "add".to_owned(),
            parameters: vec!["x".to_owned(), "y".to_owned()],
            body: vec![],
            env: Rc::new(RefCell::new(Environment::new())),
        };

        let cases = vec![
            (RuntimeVal::Null, "null"),
            (true.into(), "true"),
            (14.0.into(), "14"),
            (0.5.into(), "0.5"),
            ((1.0 / 0.0).into(), "inf"),
            (object.into(), "{ a: 0.5, b: 2, c: null }"),
            (ObjectValue::default().into(), "{}"),
            (NativeFunction::new("answer", answer).into(), "<native fn answer>"),
            (function.into(), "fn add(x, y)"),
        ];

        for (value, expected) in cases.into_iter() {
            assert_eq!(value.to_string(), expected);
        }
    }

    #[test]
    fn test_native_call() {
        let native = NativeFunction::new("answer", answer);
        assert_eq!(native.call(vec![], &Environment::new()), Ok(RuntimeVal::Number(42.0)));
        assert_eq!(RuntimeVal::from(native).type_name(), "native-fn");
    }

    #[test]
    fn test_function_identity() {
        let env = Rc::new(RefCell::new(Environment::new()));
        let function = |env: &Rc<RefCell<Environment>>| FunctionValue {
            name: "f".to_owned(),
            parameters: vec![],
            body: vec![],
            env: Rc::clone(env),
        };

        assert_eq!(function(&env), function(&env));
        assert_ne!(
            function(&env),
            function(&Rc::new(RefCell::new(Environment::new())))
        );
    }
}
