//! Registry for looking up integrators by name
//!
//! Each integrator is self-describing, providing its own name, aliases and
//! convergence order. The registry queries this metadata on registration to
//! build a lookup table, so configuration files and the command line can
//! select an integrator by string.

use super::Integrator;
use crate::error::{Result, SimulationError};
use std::collections::{HashMap, HashSet};

/// Integrators indexed by canonical name and by every alias
pub struct IntegratorRegistry {
    integrators: HashMap<String, Box<dyn Integrator>>,
}

impl IntegratorRegistry {
    /// Create an empty registry without any pre-registered integrators.
    pub fn new() -> Self {
        Self {
            integrators: HashMap::new(),
        }
    }

    /// Register all built-in integrators.
    pub fn with_standard_integrators(mut self) -> Self {
        use super::{ExplicitEuler, SymplecticEuler, VelocityVerlet};

        self.register_integrator(Box::new(VelocityVerlet));
        self.register_integrator(Box::new(SymplecticEuler));
        self.register_integrator(Box::new(ExplicitEuler));

        self
    }

    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.register_integrator(integrator);
        self
    }

    pub fn register_integrator(&mut self, integrator: Box<dyn Integrator>) {
        for alias in integrator.aliases() {
            self.integrators
                .insert(alias.to_string(), integrator.clone_box());
        }

        self.integrators
            .insert(integrator.name().to_string(), integrator);
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn Integrator>> {
        self.integrators
            .get(name)
            .map(|integrator| integrator.clone_box())
            .ok_or_else(|| SimulationError::UnknownIntegrator {
                name: name.to_string(),
                available: self.list_available(),
            })
    }

    /// Sorted canonical names
    pub fn list_available(&self) -> Vec<String> {
        let canonical_names: HashSet<&str> = self
            .integrators
            .values()
            .map(|integrator| integrator.name())
            .collect();

        let mut names: Vec<String> = canonical_names.into_iter().map(str::to_string).collect();
        names.sort();
        names
    }

    /// Sorted `(alias, canonical name)` pairs
    pub fn list_aliases(&self) -> Vec<(String, String)> {
        let mut aliases: Vec<(String, String)> = self
            .integrators
            .iter()
            .filter(|(key, integrator)| key.as_str() != integrator.name())
            .map(|(key, integrator)| (key.clone(), integrator.name().to_string()))
            .collect();

        aliases.sort_by(|a, b| a.0.cmp(&b.0));
        aliases
    }
}

impl Default for IntegratorRegistry {
    fn default() -> Self {
        Self::new().with_standard_integrators()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::body::Body;
    use crate::physics::forces::ForceModel;
    use crate::physics::math::Scalar;

    #[derive(Debug, Clone)]
    struct TestIntegratorA;

    impl Integrator for TestIntegratorA {
        fn clone_box(&self) -> Box<dyn Integrator> {
            Box::new(self.clone())
        }

        fn step(&self, _: &mut [Body], _: &dyn ForceModel, _: Scalar) {}

        fn convergence_order(&self) -> usize {
            2
        }

        fn is_symplectic(&self) -> bool {
            true
        }

        fn name(&self) -> &'static str {
            "test_a"
        }

        fn aliases(&self) -> Vec<&'static str> {
            vec!["ta", "test_alias_a"]
        }
    }

    #[derive(Debug, Clone)]
    struct TestIntegratorNoAlias;

    impl Integrator for TestIntegratorNoAlias {
        fn clone_box(&self) -> Box<dyn Integrator> {
            Box::new(self.clone())
        }

        fn step(&self, _: &mut [Body], _: &dyn ForceModel, _: Scalar) {}

        fn convergence_order(&self) -> usize {
            1
        }

        fn is_symplectic(&self) -> bool {
            false
        }

        fn name(&self) -> &'static str {
            "no_alias"
        }
    }

    #[test]
    fn test_alias_resolution() {
        let registry = IntegratorRegistry::new().with_integrator(Box::new(TestIntegratorA));

        assert_eq!(registry.create("ta").unwrap().name(), "test_a");
        assert_eq!(registry.create("test_alias_a").unwrap().name(), "test_a");
        assert_eq!(registry.list_available(), vec!["test_a".to_string()]);
    }

    #[test]
    fn test_list_aliases() {
        let registry = IntegratorRegistry::new()
            .with_integrator(Box::new(TestIntegratorA))
            .with_integrator(Box::new(TestIntegratorNoAlias));

        assert_eq!(
            registry.list_aliases(),
            vec![
                ("ta".to_string(), "test_a".to_string()),
                ("test_alias_a".to_string(), "test_a".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_integrator_error() {
        let registry = IntegratorRegistry::default();

        match registry.create("nonexistent") {
            Err(SimulationError::UnknownIntegrator { name, available }) => {
                assert_eq!(name, "nonexistent");
                assert_eq!(
                    available,
                    vec!["explicit_euler", "symplectic_euler", "velocity_verlet"]
                );
            }
            other => panic!("Expected unknown integrator error, got {other:?}"),
        }
    }

    #[test]
    fn test_case_sensitivity() {
        let registry = IntegratorRegistry::default();

        assert!(registry.create("Velocity_Verlet").is_err());
        assert!(registry.create("VERLET").is_err());
        assert!(registry.create("velocity_verlet").is_ok());
    }

    #[test]
    fn test_duplicate_registration() {
        let registry = IntegratorRegistry::new()
            .with_integrator(Box::new(TestIntegratorA))
            .with_integrator(Box::new(TestIntegratorA));

        assert_eq!(registry.list_available().len(), 1);
        assert!(registry.create("ta").is_ok());
    }

    #[test]
    fn test_empty_registry() {
        let registry = IntegratorRegistry::new();

        assert!(registry.list_available().is_empty());
        assert!(registry.list_aliases().is_empty());
        assert!(registry.create("velocity_verlet").is_err());
    }

    #[test]
    fn test_standard_registry_resolves_everything() {
        let registry = IntegratorRegistry::default();

        for name in registry.list_available() {
            assert_eq!(registry.create(&name).unwrap().name(), name);
        }

        for (alias, canonical) in registry.list_aliases() {
            let integrator = registry.create(&alias).unwrap();
            assert_eq!(
                integrator.name(),
                canonical,
                "Alias '{alias}' resolved to the wrong integrator"
            );
        }
    }

    #[test]
    fn test_only_velocity_verlet_is_second_order() {
        let registry = IntegratorRegistry::default();

        assert_eq!(registry.create("vv").unwrap().convergence_order(), 2);
        assert_eq!(registry.create("euler").unwrap().convergence_order(), 1);
        assert!(!registry.create("forward_euler").unwrap().is_symplectic());
    }
}
