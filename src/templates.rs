//! Pre-authored script skeletons, one per content type.
//!
//! Placeholders: `{topic}`, `{audience}` and `{duration}`. Substitution is a
//! single pass, so placeholder-like text inside a topic is kept verbatim.

use crate::profile::MAX_POINT_COUNT;
use crate::types::ContentType;

pub const TITLE_CANDIDATES: usize = 4;

#[derive(Debug)]
pub struct ContentTemplate {
    pub hook: &'static str,
    pub intro: &'static str,
    pub main_points: [&'static str; MAX_POINT_COUNT],
    pub key_takeaways: [&'static str; 4],
    pub outro: &'static str,
    pub call_to_action: &'static str,
    pub titles: [&'static str; TITLE_CANDIDATES],
}

impl ContentType {
    pub fn template(&self) -> &'static ContentTemplate {
        match self {
            ContentType::Tutorial => &TUTORIAL,
            ContentType::Analysis => &ANALYSIS,
            ContentType::Story => &STORY,
            ContentType::Review => &REVIEW,
            ContentType::Interview => &INTERVIEW,
        }
    }
}

/// Values substituted into template slots.
#[derive(Debug, Clone, Copy)]
pub struct Placeholders<'a> {
    pub topic: &'a str,
    pub audience: &'a str,
    pub duration: &'a str,
}

impl<'a> Placeholders<'a> {
    fn lookup(&self, name: &str) -> Option<&'a str> {
        match name {
            "topic" => Some(self.topic),
            "audience" => Some(self.audience),
            "duration" => Some(self.duration),
            _ => None,
        }
    }
}

pub fn fill(template: &str, vars: &Placeholders<'_>) -> String {
    let mut out = String::with_capacity(template.len() + vars.topic.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let resolved = tail
            .find('}')
            .and_then(|end| vars.lookup(&tail[1..end]).map(|value| (end, value)));

        match resolved {
            Some((end, value)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

static TUTORIAL: ContentTemplate = ContentTemplate {
    hook: "Are you struggling with {topic}? You're not alone. In the next {duration}, I'm going to show you exactly how to master this, step by step, with real examples that actually work.",
    intro: "Welcome back to the channel! Today we're diving deep into {topic}, and I promise this isn't going to be another surface-level overview. I've spent months researching this, testing different approaches, and I'm going to share everything I've learned, including the mistakes you need to avoid. Whether you're at the {audience} level or someone who's been struggling with this for a while, by the end of this video you'll have a clear roadmap to success.",
    main_points: [
        "Let's start with the fundamentals: what exactly is {topic} and why does it matter more than most people realize? I'll break down the core concepts in simple terms.",
        "The biggest misconceptions people have about {topic}. I see these mistakes everywhere, and they're costing people time, money, and results.",
        "My proven step-by-step framework for {topic}. This is the exact process I use, and I'll walk you through each stage with real examples.",
        "Advanced strategies that separate beginners from experts. These are the techniques that most tutorials don't cover, but they make all the difference.",
        "Common pitfalls and how to avoid them. I'll share the mistakes I made so you don't have to, plus warning signs to watch out for.",
        "Tools and resources that will accelerate your progress. I'll show you my complete toolkit, including free alternatives to expensive software.",
        "Real-world case studies and success stories. Let's look at how others have applied these principles and the results they achieved.",
    ],
    key_takeaways: [
        "Understanding the core principles of {topic} is more important than memorizing techniques",
        "Consistency and practice beat perfection every time",
        "The right tools can accelerate your progress, but they're not a substitute for understanding",
        "Learning from others' mistakes is faster than making them yourself",
    ],
    outro: "And there you have it: everything you need to know about {topic}. But here's the thing: knowledge without action is worthless. I want you to pick one thing from this video and implement it this week. Just one thing. Then come back and let me know how it went in the comments.",
    call_to_action: "If this helped you with {topic}, smash that like button so the algorithm shows it to more people who need it. Subscribe for more in-depth tutorials like this, and hit the bell so you don't miss the follow-up that builds on what we covered today.",
    titles: [
        "The Complete {topic} Guide (Step-by-Step)",
        "Master {topic} in 2024: Everything You Need to Know",
        "{topic} Tutorial: From Beginner to Expert",
        "How to {topic}: The Ultimate Guide",
    ],
};

static ANALYSIS: ContentTemplate = ContentTemplate {
    hook: "Everyone's talking about {topic}, but nobody's asking the right questions. Today, we're going beyond the headlines to uncover what's really happening and what it means for you.",
    intro: "What's up everyone! The internet is buzzing about {topic}, and honestly, most of the coverage is missing the point. I've been researching this for weeks, digging into data that most people aren't looking at, and what I found will probably surprise you. This isn't just another hot take: we're going to analyze this properly, look at the evidence, and figure out what this actually means for the future.",
    main_points: [
        "Let's establish the facts first. What exactly is happening with {topic}? I'll break down the key developments and separate signal from noise.",
        "The historical context everyone's ignoring. To understand where we're going, we need to understand how we got here.",
        "The data tells a different story than the headlines. Let me show you the numbers that matter and what they really mean.",
        "Who benefits and who loses? Every change creates winners and losers, so let's identify them and understand their motivations.",
        "The ripple effects nobody's talking about. This impacts way more than you think, and I'll connect the dots.",
        "What the experts are getting wrong. I'll challenge some popular opinions with evidence and logic.",
        "My predictions for what happens next, based on patterns and precedents, not wishful thinking.",
    ],
    key_takeaways: [
        "The situation is more complex than most media coverage suggests",
        "Historical patterns can help predict future outcomes",
        "Follow the incentives to understand the real motivations",
        "Second-order effects are often more important than first-order effects",
    ],
    outro: "So what's the bottom line? {topic} is going to keep evolving, and the people who understand the deeper dynamics will be better positioned to adapt. This isn't about being right or wrong. It's about being prepared.",
    call_to_action: "What do you think about {topic}? Am I missing something important? Drop your analysis in the comments. I read every single one and often feature the best insights in follow-up videos. Like if this gave you a new perspective, and subscribe for more deep dives like this.",
    titles: [
        "{topic}: What Everyone Gets Wrong",
        "The Truth About {topic} (Data Analysis)",
        "{topic} Explained: Beyond the Headlines",
        "Why {topic} Changes Everything",
    ],
};

static STORY: ContentTemplate = ContentTemplate {
    hook: "This story about {topic} sounds impossible, but I have the receipts. What happened next changed everything I thought I knew.",
    intro: "Hey everyone! I've been debating whether to share this story for months, but after everything that's happened, I think you need to hear it. This is about {topic}, but it's really about how one moment can completely shift your perspective. Grab some popcorn because this gets wild.",
    main_points: [
        "Let me set the scene. This is where it all started, and honestly, I had no idea what I was getting into.",
        "The first sign something was different. Looking back, this should have been a red flag, but at the time I was too excited to notice.",
        "The moment everything changed. This is where the story takes a turn that nobody saw coming, including me.",
        "The challenges nobody warns you about. This is the part they don't show in the highlight reels.",
        "The breakthrough that made it all worth it. After everything we'd been through, this moment was pure magic.",
        "The lessons I learned that you can't get from books or courses. Real wisdom only comes from real experience.",
        "How this experience completely changed my approach to {topic} and life in general.",
    ],
    key_takeaways: [
        "Sometimes the best opportunities come disguised as problems",
        "Your biggest failures often lead to your biggest breakthroughs",
        "Trust the process, even when you can't see the destination",
        "The journey teaches you more than the destination ever could",
    ],
    outro: "And that's how {topic} completely changed my life. I know it sounds dramatic, but sometimes life is dramatic. The point isn't the specific details. It's that you never know which experience will be the one that changes everything.",
    call_to_action: "Have you had your own experience with {topic}? I'd love to hear your story in the comments. And if this resonated with you, hit that like button and subscribe. I share more personal stories and lessons learned on this channel.",
    titles: [
        "How {topic} Changed My Life",
        "My {topic} Journey: Failures, Breakthroughs & Lessons",
        "The {topic} Story Nobody Talks About",
        "What {topic} Taught Me About Success",
    ],
};

static REVIEW: ContentTemplate = ContentTemplate {
    hook: "I spent months putting {topic} through real-world use so you don't have to. In the next {duration}, you'll find out if it's actually worth your time and money.",
    intro: "Welcome back! Today we're doing a full, honest review of {topic}. Nobody sponsored this video and nobody paid me to say nice things. I'm going to cover what works, what doesn't, and who this is really for, with a special focus on viewers at the {audience} level.",
    main_points: [
        "First impressions of {topic}. What you get out of the box, how setup went, and whether it lives up to the marketing.",
        "The standout strengths. These are the features that genuinely impressed me after weeks of daily use.",
        "The weaknesses nobody mentions. Every product has trade-offs, and these are the ones that actually matter.",
        "How it compares to the alternatives. I put it side by side with the most popular competitors.",
        "Value for money. Let's break down the real cost, including the hidden extras people forget about.",
        "Who should buy it and who should skip it. Your situation changes the answer more than you'd think.",
        "My long-term verdict after six months, including the things that changed my mind along the way.",
    ],
    key_takeaways: [
        "Marketing claims and real-world performance are rarely the same thing",
        "The best option depends on how you'll actually use it",
        "Hidden costs can change the value equation completely",
        "Long-term use reveals strengths and flaws that first impressions miss",
    ],
    outro: "So, is {topic} worth it? For the right person, absolutely. For everyone else, there are better ways to spend your money. Think about how you'll really use it before you decide.",
    call_to_action: "Are you using {topic}, or thinking about it? Tell me in the comments what you'd like me to test next. Like this review if it saved you some research, and subscribe for more honest breakdowns.",
    titles: [
        "{topic}: Honest Review After 6 Months",
        "Is {topic} Worth It? Complete Breakdown",
        "{topic} Review: The Good, Bad & Ugly",
        "Testing {topic} So You Don't Have To",
    ],
};

static INTERVIEW: ContentTemplate = ContentTemplate {
    hook: "What if you could sit down with someone who has spent years mastering {topic}? That's exactly what we're doing today, and some of these answers surprised even me.",
    intro: "Welcome to another conversation on the channel! Today's guest has been working with {topic} for over a decade, and they've agreed to share the insights that usually stay behind closed doors. I picked these questions with {audience} viewers in mind, so whether you're just curious or deep into this already, there's something here for you.",
    main_points: [
        "How our guest got started with {topic}, and the moment they realized it would become their career.",
        "The biggest myths about {topic} that our guest hears over and over again.",
        "A behind-the-scenes look at their daily workflow and the habits that keep them ahead.",
        "The hardest setback of their career and what it taught them about resilience.",
        "Where the industry is heading in the next five years, and how to prepare for it.",
        "The advice they wish someone had given them on day one.",
        "Rapid-fire round: favorite tools, books, and people to follow.",
    ],
    key_takeaways: [
        "Experience compounds: small consistent efforts add up to expertise",
        "Most myths persist because nobody questions them",
        "Setbacks are part of every successful career",
        "Learning from practitioners is the fastest path to real insight",
    ],
    outro: "That's a wrap on today's conversation about {topic}. I learned a ton, and I hope you did too. If even one of these insights sticks with you, this hour was well spent.",
    call_to_action: "Which answer about {topic} surprised you the most? Let me know in the comments, along with who you'd like me to interview next. Subscribe and ring the bell so you catch the next conversation.",
    titles: [
        "Expert Reveals {topic} Secrets",
        "Inside {topic} with Industry Leader",
        "{topic} Masterclass: Expert Interview",
        "Exclusive: {topic} Insights from the Pros",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: Placeholders<'static> = Placeholders {
        topic: "sourdough",
        audience: "beginner",
        duration: "4-6 minutes",
    };

    #[test]
    fn test_fill_substitutes_all_placeholders() {
        let out = fill("{topic} for {audience} in {duration}", &VARS);
        assert_eq!(out, "sourdough for beginner in 4-6 minutes");
    }

    #[test]
    fn test_fill_keeps_unknown_braces() {
        assert_eq!(fill("{nope} {topic} {", &VARS), "{nope} sourdough {");
    }

    #[test]
    fn test_fill_does_not_expand_topic_contents() {
        let vars = Placeholders {
            topic: "{audience} braces",
            ..VARS
        };
        assert_eq!(fill("About {topic}", &vars), "About {audience} braces");
    }

    #[test]
    fn test_every_template_mentions_topic_in_framing_sections() {
        for ct in ContentType::ALL {
            let t = ct.template();
            for text in [t.hook, t.intro, t.outro, t.call_to_action] {
                assert!(text.contains("{topic}"), "{ct}: {text}");
            }
            for title in t.titles {
                assert!(title.contains("{topic}"), "{ct}: {title}");
            }
        }
    }
}
