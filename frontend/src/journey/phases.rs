/// Who is talking in a demo chat bubble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Ai,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatLine {
    pub speaker: Speaker,
    pub text: &'static str,
}

/// Which illustration the visual panel draws for a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visual {
    ProfileBuilding,
    Matching,
    DatePlanning,
    RelationshipSupport,
}

impl Visual {
    /// Status line shown under the illustration.
    pub fn caption(self) -> &'static str {
        match self {
            Visual::ProfileBuilding => "Building your profile...",
            Visual::Matching => "Finding compatible matches...",
            Visual::DatePlanning => "Planning your perfect date...",
            Visual::RelationshipSupport => "AI-powered relationship support...",
        }
    }
}

/// One frame of the product demo. `id` is 1-based and never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phase {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub visual: Visual,
    pub chat: &'static [ChatLine],
}

pub const PHASES: [Phase; 4] = [
    Phase {
        id: 1,
        title: "Learning You",
        description: "AI understands your personality through conversation",
        visual: Visual::ProfileBuilding,
        chat: &[
            ChatLine {
                speaker: Speaker::User,
                text: "I love reading fantasy and non-fiction books",
            },
            ChatLine {
                speaker: Speaker::Ai,
                text: "What draws you to those books? Would you want your partner to share that interest?",
            },
        ],
    },
    Phase {
        id: 2,
        title: "Finding Matches",
        description: "Smart compatibility based on personality alignment",
        visual: Visual::Matching,
        chat: &[ChatLine {
            speaker: Speaker::Ai,
            text: "I found someone who shares your love of The Empyrean series and values authenticity.",
        }],
    },
    Phase {
        id: 3,
        title: "Organising Dates",
        description: "AI helps plan and coordinate meaningful meetups",
        visual: Visual::DatePlanning,
        chat: &[ChatLine {
            speaker: Speaker::Ai,
            text: "Based on your shared interest in fantasy, I suggest you try out this new escape room nearby. Shall I help coordinate?",
        }],
    },
    Phase {
        id: 4,
        title: "Relationship Support",
        description: "Ongoing guidance for lasting connections",
        visual: Visual::RelationshipSupport,
        chat: &[ChatLine {
            speaker: Speaker::Ai,
            text: "Great date, happy it went well! Here are some thoughtful follow-up conversation starters based on what you both enjoyed.",
        }],
    },
];
