use crate::environment::Environment;
use crate::object::*;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

fn print(args: Vec<RuntimeVal>, _env: &Environment) -> Result<RuntimeVal> {
    let rendered: Vec<String> = args.iter().map(RuntimeVal::to_string).collect();
    println!("{}", rendered.join(" "));
    Ok(RuntimeVal::Null)
}

// Milliseconds since the Unix epoch.
fn time(_args: Vec<RuntimeVal>, _env: &Environment) -> Result<RuntimeVal> {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as f64)
        .unwrap_or_default();
    Ok(RuntimeVal::Number(millis))
}

lazy_static! {
    pub static ref NATIVES: HashMap<&'static str, NativeFunction> = vec![
        ("print", NativeFunction::new("print", print)),
        ("time", NativeFunction::new("time", time)),
    ]
    .into_iter()
    .collect();
}

pub fn global_environment() -> Result<Environment> {
    let mut env = Environment::new();
    env.declare("true", true.into(), true)?;
    env.declare("false", false.into(), true)?;
    env.declare("null", RuntimeVal::Null, true)?;

    for (name, native) in NATIVES.iter() {
        env.declare(name, (*native).into(), true)?;
    }

    Ok(env)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_global_environment() {
        let env = global_environment().expect("global environment");

        let cases = vec![
            ("true", RuntimeVal::Boolean(true)),
            ("false", RuntimeVal::Boolean(false)),
            ("null", RuntimeVal::Null),
            ("print", NativeFunction::new("print", print).into()),
            ("time", NativeFunction::new("time", time).into()),
        ];

        for (name, value) in cases.into_iter() {
            assert_eq!(env.lookup(name), Ok(value));
            assert!(env.is_constant(name), "{} should be constant", name);
        }
    }

    #[test]
    fn test_natives() {
        let env = Environment::new();

        assert_eq!(
            NATIVES["print"].call(vec![1.0.into(), RuntimeVal::Null], &env),
            Ok(RuntimeVal::Null)
        );

        match NATIVES["time"].call(vec![], &env) {
            Ok(RuntimeVal::Number(millis)) => assert!(millis > 0.0),
            result => panic!("unexpected result {:?}", result),
        }
    }
}
