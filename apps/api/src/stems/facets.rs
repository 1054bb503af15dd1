//! The fixed facet catalogue. Each facet is paired with one anchor sentence
//! that generated stems must stay close to.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Facet {
    pub facet: &'static str,
    pub anchor: &'static str,
}

const fn facet(facet: &'static str, anchor: &'static str) -> Facet {
    Facet { facet, anchor }
}

static FACETS: [Facet; 36] = [
    facet("Analytical Reasoning", "I break problems into clear steps."),
    facet("Systems Perspective", "I see how parts fit a whole."),
    facet("Foresight", "I anticipate future outcomes."),
    facet("Curiosity", "I enjoy exploring new ideas."),
    facet("Reflective Learning", "I think about what I've learned."),
    facet("Sense-Making", "I turn data into clear stories."),
    facet("Ideation", "I generate many ideas quickly."),
    facet("Innovation", "I turn ideas into real projects."),
    facet("Aesthetic Sensitivity", "I notice small design details."),
    facet("Improvisation", "I adapt when plans change."),
    facet("Experimentation", "I test ideas to see what works."),
    facet("Synthesising", "I combine ideas into new concepts."),
    facet("Achievement Focus", "I aim for challenging goals."),
    facet("Discipline", "I stick to a task until done."),
    facet("Adaptable Execution", "I adjust plans when things change."),
    facet("Resilience", "I bounce back after setbacks."),
    facet("Initiative", "I act without being told."),
    facet("Efficiency", "I finish tasks in less time."),
    facet("Responsibility", "I own the outcomes of my work."),
    facet("Ethics", "I act according to my values."),
    facet("Reliability", "I deliver on time consistently."),
    facet("Patience", "I stay calm when waiting."),
    facet("Organising", "I keep tasks and data in order."),
    facet("Safety Orientation", "I take steps to avoid accidents."),
    facet("Empathy", "I feel others' emotions."),
    facet("Social Awareness", "I read social cues accurately."),
    facet("Collaboration", "I cooperate toward shared goals."),
    facet("Trust Building", "I earn others' confidence."),
    facet("Inclusiveness", "I welcome diverse viewpoints."),
    facet("Mentorship", "I help others develop skills."),
    facet("Persuasion", "I can convince others of my ideas."),
    facet("Storytelling", "I explain ideas through stories."),
    facet("Confidence", "I project self-assurance."),
    facet("Energising", "I lift group morale."),
    facet("Negotiation", "I reach deals that satisfy all sides."),
    facet("Vision Casting", "I paint a compelling future."),
];

/// All facets in catalogue order.
pub fn all_facets() -> &'static [Facet] {
    &FACETS
}
