//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use dns_spaceship::SpaceshipModule;
use dns_spaceship_host::{Dispenser, ParseError, ProvisionContext};

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误值。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// Parses `input` as one or more `spaceship` directives into a fresh module.
pub fn parse_module(input: &str) -> Result<SpaceshipModule, ParseError> {
    let mut module = SpaceshipModule::new();
    parse_into(&mut module, input)?;
    Ok(module)
}

/// Parses `input` into an existing (possibly pre-populated) module.
pub fn parse_into(module: &mut SpaceshipModule, input: &str) -> Result<(), ParseError> {
    let mut d = Dispenser::parse("Caddyfile", input)?;
    module.unmarshal_directive(&mut d)
}

/// Provisioning context with a fixed environment instead of the process one.
pub fn context_with_env(pairs: &[(&str, &str)]) -> ProvisionContext {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    ProvisionContext::with_env(Arc::new(move |name: &str| vars.get(name).cloned()))
}
