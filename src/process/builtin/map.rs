use super::{BUILTIN_NAMES, Builtin};
use crate::control_state::ControlFlow;
use crate::process::cd::Cd;
use crate::process::exit::Exit;
use crate::process::help::Help;
use crate::sink::BuiltinIo;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The process-wide builtin table, built on first use and never modified afterwards.
pub static BUILTINS: Lazy<BuiltinMap> = Lazy::new(|| {
    let mut builtins = BuiltinMap::new();
    builtins.populate_func_map();
    builtins
});

pub struct BuiltinMap {
    func_map: HashMap<&'static str, Box<dyn Builtin>>,
}

impl BuiltinMap {
    pub fn new() -> Self {
        BuiltinMap {
            func_map: HashMap::new(),
        }
    }

    pub fn populate_func_map(&mut self) {
        // If builtin map is not empty abort inital population
        if !self.is_empty() {
            return;
        }

        self.add("cd", Box::new(Cd::new()));
        self.add("help", Box::new(Help::new()));
        self.add("exit", Box::new(Exit::new()));
        debug_assert!(BUILTIN_NAMES.iter().all(|name| self.contains(name)));
    }

    /// Look up a builtin by exact, case-sensitive name.
    pub fn get(&self, func_name: &str) -> Option<&dyn Builtin> {
        self.func_map.get(func_name).map(|builtin| builtin.as_ref())
    }

    /// Run the builtin registered as `args[0]`, or return `None` when there is none.
    pub fn invoke(&self, args: &[String], io: &mut BuiltinIo<'_>) -> Option<ControlFlow> {
        let name = args.first()?;
        self.get(name).map(|builtin| builtin.call(args, io))
    }

    pub fn add(&mut self, func_name: &'static str, func_ptr: Box<dyn Builtin>) {
        self.func_map.insert(func_name, func_ptr);
    }

    pub fn contains(&self, func_name: &str) -> bool {
        self.func_map.contains_key(func_name)
    }

    pub fn is_empty(&self) -> bool {
        self.func_map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.func_map.len()
    }
}

impl Default for BuiltinMap {
    fn default() -> Self {
        Self::new()
    }
}
