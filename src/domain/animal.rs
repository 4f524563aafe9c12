// ============================================================
// Layer 3 — Animals
// ============================================================
// Three unrelated structs — Dog, Cat, Bird — that all
// implement the Animal trait. Because the trait guarantees
// `name` and `speak`, they can share one collection and be
// handed to functions that know nothing about dogs or cats.
//
// What a `&dyn Animal` CANNOT do is reach kind-specific
// members (Dog::run, Cat::age, ...). Getting those back
// requires an explicit narrowing step, `narrow::<Dog>`,
// which fails with a NarrowingError if the assertion is wrong.
//
// Reference: Rust Book §17.2 (Trait Objects)
//            std::any::Any (downcast_ref)

use crate::domain::error::NarrowingError;
use crate::domain::traits::Animal;

// ─── Dog ──────────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    name:  String,
    breed: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self { name: name.into(), breed: breed.into() }
    }

    /// Dog-only attribute
    pub fn breed(&self) -> &str {
        &self.breed
    }

    /// Dog-only behaviour
    pub fn run(&self) -> String {
        format!("{} is running.", self.name)
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        format!("{} ({}) says: Woof!", self.name, self.breed)
    }
}

// ─── Cat ──────────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    name: String,
    age:  u32,
}

impl Cat {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self { name: name.into(), age }
    }

    /// Cat-only attribute
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Cat-only behaviour
    pub fn sleep(&self) -> String {
        format!("{} is sleeping.", self.name)
    }
}

impl Animal for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        format!("{} ({} years old) says: Meow!", self.name, self.age)
    }
}

// ─── Bird ─────────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bird {
    name:  String,
    color: String,
}

impl Bird {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self { name: name.into(), color: color.into() }
    }

    /// Bird-only attribute
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Bird-only behaviour
    pub fn fly(&self) -> String {
        format!("{} flies away.", self.name)
    }
}

impl Animal for Bird {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        format!("{} ({} bird) says: Tweet!", self.name, self.color)
    }
}

// ─── Capability-only operations ───────────────────────────────────────────────

/// Let every animal speak, in iteration order.
///
/// Only the Animal trait is visible here, yet each call still
/// includes the breed, age or color the trait never exposes.
///
/// Kind-specific members are out of reach through the trait:
///
/// ```compile_fail
/// use interface_lectures::domain::animal::Dog;
/// use interface_lectures::domain::traits::Animal;
///
/// let dog: Box<dyn Animal> = Box::new(Dog::new("Pochi", "Golden Retriever"));
/// dog.run(); // no method named `run` found for `Box<dyn Animal>`
/// ```
pub fn speak_all<'a, I>(animals: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a dyn Animal>,
{
    animals.into_iter().map(|a| a.speak()).collect()
}

/// Project every animal's name, preserving input order.
pub fn animal_names<'a, I>(animals: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a dyn Animal>,
{
    animals.into_iter().map(|a| a.name().to_string()).collect()
}

/// Checked narrowing from the capability back to a concrete kind.
///
/// ```
/// use interface_lectures::domain::animal::{narrow, Bird, Dog};
/// use interface_lectures::domain::traits::Animal;
///
/// let bird: Box<dyn Animal> = Box::new(Bird::new("Piko", "Blue"));
/// assert_eq!(narrow::<Bird>(&*bird).unwrap().color(), "Blue");
/// assert!(narrow::<Dog>(&*bird).is_err());
/// ```
pub fn narrow<T: Animal>(animal: &dyn Animal) -> Result<&T, NarrowingError> {
    animal
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| NarrowingError::KindMismatch {
            name:     animal.name().to_string(),
            expected: kind_name::<T>(),
        })
}

/// Short type name, e.g. "Dog" rather than the full module path
fn kind_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn zoo() -> (Dog, Cat, Bird) {
        (
            Dog::new("Pochi", "Golden Retriever"),
            Cat::new("Tama", 3),
            Bird::new("Piko", "Blue"),
        )
    }

    #[test]
    fn test_speak_all_includes_kind_attributes_in_order() {
        let (dog, cat, bird) = zoo();
        let animals: Vec<&dyn Animal> = vec![&dog, &cat, &bird];

        let calls = speak_all(animals.iter().copied());
        assert_eq!(calls.len(), 3);
        assert!(calls[0].contains("Pochi") && calls[0].contains("Golden Retriever"));
        assert!(calls[1].contains("Tama") && calls[1].contains('3'));
        assert!(calls[2].contains("Piko") && calls[2].contains("Blue"));
    }

    #[test]
    fn test_speak_exact_wording() {
        let (dog, cat, bird) = zoo();
        assert_eq!(dog.speak(),  "Pochi (Golden Retriever) says: Woof!");
        assert_eq!(cat.speak(),  "Tama (3 years old) says: Meow!");
        assert_eq!(bird.speak(), "Piko (Blue bird) says: Tweet!");
    }

    #[test]
    fn test_animal_names_preserves_order() {
        let (dog, cat, bird) = zoo();
        let animals: Vec<&dyn Animal> = vec![&dog, &cat, &bird];
        assert_eq!(animal_names(animals), ["Pochi", "Tama", "Piko"]);
    }

    #[test]
    fn test_boxed_animals_share_one_collection() {
        let animals: Vec<Box<dyn Animal>> = vec![
            Box::new(Bird::new("Piko", "Blue")),
            Box::new(Dog::new("Pochi", "Shiba")),
        ];
        let names = animal_names(animals.iter().map(|a| a.as_ref()));
        assert_eq!(names, ["Piko", "Pochi"]);
    }

    #[test]
    fn test_narrow_to_correct_kind() {
        let dog: Box<dyn Animal> = Box::new(Dog::new("Pochi", "Golden Retriever"));
        let narrowed = narrow::<Dog>(dog.as_ref()).unwrap();
        assert_eq!(narrowed.breed(), "Golden Retriever");
        assert_eq!(narrowed.run(), "Pochi is running.");
    }

    #[test]
    fn test_narrow_to_wrong_kind_fails() {
        let cat = Cat::new("Tama", 3);
        let err = narrow::<Bird>(&cat).unwrap_err();
        assert_eq!(
            err,
            NarrowingError::KindMismatch { name: "Tama".into(), expected: "Bird" }
        );
        assert_eq!(err.to_string(), "'Tama' is not a Bird");
    }

    #[test]
    fn test_kind_specific_behaviour() {
        let (_, cat, bird) = zoo();
        assert_eq!(cat.age(), 3);
        assert_eq!(cat.sleep(), "Tama is sleeping.");
        assert_eq!(bird.fly(), "Piko flies away.");
    }

    #[test]
    fn test_empty_collection() {
        let none: Vec<&dyn Animal> = Vec::new();
        assert!(speak_all(none.iter().copied()).is_empty());
        assert!(animal_names(none).is_empty());
    }
}
