// ============================================================
// Layer 2 — Function Guarantee Lecture
// ============================================================
// Dog, Cat and Bird have nothing in common except that they
// implement Animal. That is enough to:
//
//   Step 1: keep Dog and Bird as Box<dyn Animal>, Cat as Cat
//   Step 2: use Cat's own members directly (age, sleep)
//   Step 3: put all three in one Vec<&dyn Animal>
//   Step 4: make them all speak through the trait
//   Step 5: hand the Vec to capability-only helpers
//   Step 6: narrow Dog and Bird back to reach run / fly
//
// Reference: Rust Book §17.2 (Using Trait Objects)

use anyhow::Result;

use crate::application::report::DemoReport;
use crate::domain::animal::{animal_names, narrow, speak_all, Bird, Cat, Dog};
use crate::domain::traits::Animal;

#[derive(Debug, Default)]
pub struct FunctionGuaranteeUseCase;

impl FunctionGuaranteeUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) -> Result<DemoReport> {
        tracing::info!("Running function guarantee lecture");

        // ── Step 1 ───────────────────────────────────────────────────────────
        let dog: Box<dyn Animal> = Box::new(Dog::new("Pochi", "Golden Retriever"));
        let cat = Cat::new("Tama", 3);
        let bird: Box<dyn Animal> = Box::new(Bird::new("Piko", "Blue"));

        // ── Step 2: only `cat` still has its concrete type ───────────────────
        // dog.breed() or bird.fly() would not compile here.
        let cat_lines = vec![format!("cat: Age = {}", cat.age()), cat.sleep()];

        // ── Step 3 ───────────────────────────────────────────────────────────
        let animals: Vec<&dyn Animal> = vec![dog.as_ref(), &cat, bird.as_ref()];

        // ── Step 4 ───────────────────────────────────────────────────────────
        let speak_lines: Vec<String> = animals.iter().map(|a| a.speak()).collect();

        // ── Step 5 ───────────────────────────────────────────────────────────
        let helper_lines = speak_all(animals.iter().copied());
        let name_lines: Vec<String> = animal_names(animals.iter().copied())
            .into_iter()
            .map(|name| format!("Animal Name: {name}"))
            .collect();

        // ── Step 6: explicit, checked narrowing ──────────────────────────────
        let narrowed_lines = vec![
            narrow::<Dog>(dog.as_ref())?.run(),
            narrow::<Bird>(bird.as_ref())?.fly(),
        ];

        Ok(DemoReport::new("Function guarantee: one capability, many kinds")
            .section("Concrete Cat", cat_lines)
            .section("Speak", speak_lines)
            .section("speak_all", helper_lines)
            .section("animal_names", name_lines)
            .section("Narrowed (Dog::run, Bird::fly)", narrowed_lines))
    }
}
