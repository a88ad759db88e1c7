//! Advice text and activity tags per domain and score band.

use crate::domain::Domain;
use crate::scoring::ScoreBand;

/// Advice for one (domain, band) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandAdvice {
    pub advice: &'static str,
    pub favorable: &'static [&'static str],
    pub unfavorable: &'static [&'static str],
}

const fn cell(
    advice: &'static str,
    favorable: &'static [&'static str],
    unfavorable: &'static [&'static str],
) -> BandAdvice {
    BandAdvice {
        advice,
        favorable,
        unfavorable,
    }
}

/// Indexed by `[domain.index()][band.index()]`, bands best first.
const ADVICE: [[BandAdvice; 4]; 8] = [
    // Love
    [
        cell(
            "Open your heart; connection comes easily today.",
            &["date nights", "honest conversations", "grand gestures"],
            &[],
        ),
        cell(
            "Warm energy around relationships. Reach out first.",
            &["reconnecting", "small kindnesses"],
            &["overthinking messages"],
        ),
        cell(
            "Feelings run mixed. Listen more than you speak.",
            &["quiet time together"],
            &["ultimatums", "jealous reactions"],
        ),
        cell(
            "Protect your peace; tender topics can wait.",
            &["self-care", "journaling feelings"],
            &["breakup talks", "confrontations", "texting an ex"],
        ),
    ],
    // Career
    [
        cell(
            "Lead boldly. Your work gets noticed.",
            &["pitching ideas", "asking for a raise", "interviews"],
            &[],
        ),
        cell(
            "Steady progress. Push one important task forward.",
            &["networking", "finishing projects"],
            &["procrastinating"],
        ),
        cell(
            "Keep your head down and stick to the plan.",
            &["routine work", "organising"],
            &["office politics", "major pitches"],
        ),
        cell(
            "Friction at work. Avoid big career moves today.",
            &["learning", "planning quietly"],
            &["quitting", "confronting your boss", "signing contracts"],
        ),
    ],
    // Money
    [
        cell(
            "Financial instincts are sharp. Act on solid opportunities.",
            &["investing", "negotiating", "major purchases"],
            &[],
        ),
        cell(
            "Good day for practical money moves.",
            &["budgeting", "paying down debt"],
            &["impulse buys"],
        ),
        cell(
            "Hold your position. Review before you spend.",
            &["reviewing accounts"],
            &["speculation", "lending money"],
        ),
        cell(
            "Guard your wallet; delay financial commitments.",
            &["saving", "tracking expenses"],
            &["big purchases", "risky investments", "gambling"],
        ),
    ],
    // Health
    [
        cell(
            "Vitality is high. Push your limits safely.",
            &["intense workouts", "starting a new routine"],
            &[],
        ),
        cell(
            "Your body responds well to care today.",
            &["exercise", "healthy cooking"],
            &["skipping meals"],
        ),
        cell(
            "Energy fluctuates. Move gently and hydrate.",
            &["walking", "stretching"],
            &["overexertion", "late nights"],
        ),
        cell(
            "Rest is productive today. Listen to your body.",
            &["sleep", "gentle yoga", "rest"],
            &["extreme workouts", "elective procedures"],
        ),
    ],
    // Social
    [
        cell(
            "You shine in company. Say yes to invitations.",
            &["parties", "hosting", "networking events"],
            &[],
        ),
        cell(
            "Friendly currents. Good for catching up.",
            &["calling friends", "group plans"],
            &["isolating"],
        ),
        cell(
            "Choose your company carefully.",
            &["one-on-one time"],
            &["large crowds", "gossip"],
        ),
        cell(
            "Social static. Keep plans small or postpone them.",
            &["time alone", "close family"],
            &["public arguments", "big gatherings", "group decisions"],
        ),
    ],
    // Decisions
    [
        cell(
            "Clarity is strong. Commit to what you know is right.",
            &["signing agreements", "making choices", "starting plans"],
            &[],
        ),
        cell(
            "Good judgement today. Decide what has been waiting.",
            &["weighing options", "committing"],
            &["endless second-guessing"],
        ),
        cell(
            "Gather information before choosing.",
            &["research", "asking advice"],
            &["snap judgements", "irreversible choices"],
        ),
        cell(
            "Judgement is clouded. Sleep on important choices.",
            &["making lists", "waiting"],
            &["signing contracts", "big commitments", "rash moves"],
        ),
    ],
    // Creativity
    [
        cell(
            "Inspiration flows. Create without editing.",
            &["starting projects", "performing", "brainstorming"],
            &[],
        ),
        cell(
            "Good creative momentum. Keep building.",
            &["practice", "collaborations"],
            &["perfectionism"],
        ),
        cell(
            "Ideas come in fits and starts. Play, don't force.",
            &["sketching", "free-writing"],
            &["publishing", "harsh self-critique"],
        ),
        cell(
            "The muse is quiet. Refill the well.",
            &["visiting galleries", "reading"],
            &["launching work", "forcing deadlines", "comparing yourself"],
        ),
    ],
    // Spiritual
    [
        cell(
            "Deep insight is available. Go inward.",
            &["meditation", "retreats", "ritual"],
            &[],
        ),
        cell(
            "Intuition is reliable today.",
            &["journaling", "time in nature"],
            &["ignoring your gut"],
        ),
        cell(
            "Seek balance between the inner and outer world.",
            &["short meditations"],
            &["spiritual bypassing", "overcommitting"],
        ),
        cell(
            "Ground yourself before seeking answers.",
            &["simple routines", "breathwork"],
            &["major life vows", "tarot binges", "escapism"],
        ),
    ],
];

/// Advice cell for a domain in a band.
pub fn band_advice(domain: Domain, band: ScoreBand) -> &'static BandAdvice {
    &ADVICE[domain.index()][band.index()]
}
