//! Common test utilities for plugrule integration tests

#![allow(dead_code)]

use plugrule::{FloatRule, FloatRuleOpt, set_default_float, set_max_float, set_min_float};

/// Enable `debug!` output from the library when `RUST_LOG` is set
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Steps for the "threshold" rule: default 1.5, range [0, 10]
pub fn threshold_options() -> [FloatRuleOpt; 3] {
    [set_default_float(1.5), set_min_float(0.0), set_max_float(10.0)]
}

pub fn threshold_rule() -> FloatRule {
    FloatRule::new("threshold", true, threshold_options()).unwrap()
}

/// Every ordering of `items`
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            out.push(tail);
        }
    }
    out
}
