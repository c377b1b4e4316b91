use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::classify::OverallStyle;

/// Guidance for collaborating with each of the four styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingRelationships {
    pub intuitives: String,
    pub conceptuals: String,
    pub pragmatists: String,
    pub deductives: String,
}

/// Descriptive content bundle for one overall style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedProfile {
    pub style_description: String,
    pub preference_description: String,
    pub application_preference_description: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub working_relationships: WorkingRelationships,
}

struct ProfileTable {
    intuitive: DetailedProfile,
    conceptual: DetailedProfile,
    pragmatic: DetailedProfile,
    deductive: DetailedProfile,
}

impl ProfileTable {
    fn get(&self, style: OverallStyle) -> &DetailedProfile {
        match style {
            OverallStyle::Intuitive => &self.intuitive,
            OverallStyle::Conceptual => &self.conceptual,
            OverallStyle::Pragmatic => &self.pragmatic,
            OverallStyle::Deductive => &self.deductive,
        }
    }
}

/// Static profile for a style. The table is built once and never mutated.
///
/// The profile copy is placeholder text, not the published descriptions.
pub fn profile_for(style: OverallStyle) -> &'static DetailedProfile {
    static TABLE: OnceLock<ProfileTable> = OnceLock::new();
    TABLE.get_or_init(build_table).get(style)
}

struct ProfileText {
    style_description: &'static str,
    preference_description: &'static str,
    application_preference_description: &'static str,
    strengths: &'static [&'static str],
    weaknesses: &'static [&'static str],
    intuitives: &'static str,
    conceptuals: &'static str,
    pragmatists: &'static str,
    deductives: &'static str,
}

impl ProfileText {
    fn into_profile(self) -> DetailedProfile {
        DetailedProfile {
            style_description: self.style_description.to_string(),
            preference_description: self.preference_description.to_string(),
            application_preference_description: self.application_preference_description.to_string(),
            strengths: self.strengths.iter().map(|s| s.to_string()).collect(),
            weaknesses: self.weaknesses.iter().map(|s| s.to_string()).collect(),
            working_relationships: WorkingRelationships {
                intuitives: self.intuitives.to_string(),
                conceptuals: self.conceptuals.to_string(),
                pragmatists: self.pragmatists.to_string(),
                deductives: self.deductives.to_string(),
            },
        }
    }
}

fn build_table() -> ProfileTable {
    ProfileTable {
        intuitive: INTUITIVE.into_profile(),
        conceptual: CONCEPTUAL.into_profile(),
        pragmatic: PRAGMATIC.into_profile(),
        deductive: DEDUCTIVE.into_profile(),
    }
}

const INTUITIVE: ProfileText = ProfileText {
    style_description: "Intuitive creators learn by doing and apply what they learn to generate new ideas. \
        They dive into unfamiliar territory, trust their instincts, and treat every experience as raw \
        material for the next possibility.",
    preference_description: "You prefer to learn through experience: trying, testing, and adjusting \
        in the moment rather than studying a subject before you begin.",
    application_preference_description: "You prefer to apply knowledge for ideation, using what you \
        know as a springboard for new concepts rather than as a recipe to follow.",
    strengths: &[
        "Comfortable starting before every detail is known",
        "Generates a wide range of original ideas quickly",
        "Adapts easily when circumstances change",
        "Brings energy and momentum to early-stage work",
    ],
    weaknesses: &[
        "May leave ideas unfinished once the novelty fades",
        "Can overlook established knowledge that would save time",
        "May find detailed planning and documentation draining",
    ],
    intuitives: "You will spark off each other easily. Agree early on who will carry ideas through to \
        completion so that momentum turns into results.",
    conceptuals: "Conceptuals share your hands-on learning but want to build what you imagine. Hand \
        them your best ideas and let them shape them into something concrete.",
    pragmatists: "Pragmatists ground your ideas in proven approaches. Give them time to study a \
        proposal and value the structure they bring to delivery.",
    deductives: "Deductives also love ideas but arrive at them through reflection. Share your \
        experiments with them and invite their reasoning to sharpen your instincts.",
};

const CONCEPTUAL: ProfileText = ProfileText {
    style_description: "Conceptual creators learn by doing and apply what they learn to produce tangible \
        results. They prototype, iterate, and turn hands-on discoveries into working solutions.",
    preference_description: "You prefer to learn through experience, picking up new skills by \
        practicing them directly and learning from what happens.",
    application_preference_description: "You prefer to apply knowledge for production, turning what \
        you know into finished, usable work.",
    strengths: &[
        "Turns experiments into working prototypes",
        "Learns new tools quickly through practice",
        "Keeps projects moving toward a concrete outcome",
        "Balances creativity with a bias toward delivery",
    ],
    weaknesses: &[
        "May commit to a solution before exploring alternatives",
        "Can become impatient with abstract discussion",
        "May undervalue research that does not lead straight to action",
    ],
    intuitives: "Intuitives supply a stream of ideas. Help them choose which ones to build and show \
        them the satisfaction of seeing an idea finished.",
    conceptuals: "You work at the same practical pace. Make space for occasional exploration so the \
        team does not settle on the first workable answer.",
    pragmatists: "Pragmatists share your focus on results but prefer to study first. Combine their \
        preparation with your hands-on iteration.",
    deductives: "Deductives think deeply before acting and favor new theory over production. Ask them \
        to stress-test your approach before you scale it.",
};

const PRAGMATIC: ProfileText = ProfileText {
    style_description: "Pragmatic creators learn through contemplation and apply what they learn to \
        produce reliable results. They study, plan, and then execute with care and precision.",
    preference_description: "You prefer to learn through contemplation, building a thorough \
        understanding of a subject before putting it to use.",
    application_preference_description: "You prefer to apply knowledge for production, delivering \
        dependable, well-executed work from a clear plan.",
    strengths: &[
        "Plans thoroughly and anticipates problems",
        "Delivers consistent, high-quality work",
        "Builds on proven methods and established knowledge",
        "Keeps commitments and meets deadlines",
    ],
    weaknesses: &[
        "May hesitate to start without enough information",
        "Can be reluctant to abandon a working method for an untested one",
        "May find open-ended brainstorming unproductive",
    ],
    intuitives: "Intuitives move fast and think big. Let them explore freely early on, then help \
        them turn the strongest ideas into a workable plan.",
    conceptuals: "Conceptuals share your drive to deliver but learn by trying. Pair your planning \
        with their prototypes to reach results faster.",
    pragmatists: "You share a disciplined, delivery-focused approach. Deliberately invite fresh \
        perspectives so the team keeps innovating.",
    deductives: "Deductives share your reflective learning style but aim it at new ideas. Use their \
        theories as input and bring the execution plan yourself.",
};

const DEDUCTIVE: ProfileText = ProfileText {
    style_description: "Deductive creators learn through contemplation and apply what they learn to \
        generate new ideas. They reason from principles, see patterns others miss, and build original \
        theories from careful thought.",
    preference_description: "You prefer to learn through contemplation, reflecting on information and \
        understanding the underlying principles before acting.",
    application_preference_description: "You prefer to apply knowledge for ideation, using deep \
        understanding to reach novel conclusions and concepts.",
    strengths: &[
        "Connects ideas into coherent frameworks",
        "Spots flaws in reasoning before they become costly",
        "Produces well-founded, original concepts",
        "Brings depth and rigor to creative discussions",
    ],
    weaknesses: &[
        "May spend too long analyzing before sharing ideas",
        "Can struggle to move from concept to implementation",
        "May discount insights that come from trial and error",
    ],
    intuitives: "Intuitives share your love of ideas but find them through action. Let their \
        experiments feed your analysis, and share your frameworks early.",
    conceptuals: "Conceptuals build things quickly. Offer them your reasoning up front and rely on \
        them to test your concepts in the real world.",
    pragmatists: "Pragmatists share your reflective approach and excel at execution. Hand them your \
        most promising concepts to turn into dependable results.",
    deductives: "You will enjoy deep discussions together. Set checkpoints for turning conclusions \
        into action so analysis does not become the goal.",
};
