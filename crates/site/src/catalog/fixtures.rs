//! The fixture dataset.
//!
//! Eight tools, eight categories, four tutorials, plus the admin dashboard's
//! pending submissions and subscribers. Collection order matters: the home
//! page and the directory's tie-breaking both follow it.

use chrono::NaiveDate;

use ai_tools_hub_core::{Email, Pricing};

use super::{Category, Submission, Subscriber, Tool, Tutorial};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn email(address: &str) -> Email {
    Email::parse(address).expect("valid fixture email")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

pub(super) fn tools() -> Vec<Tool> {
    vec![
        Tool {
            slug: "chatgpt".into(),
            name: "ChatGPT".to_string(),
            logo_url: "https://upload.wikimedia.org/wikipedia/commons/0/04/ChatGPT_logo.svg"
                .to_string(),
            description: "ChatGPT is an AI-powered language model developed by OpenAI that can \
                          engage in conversational dialogue, answer questions, write content, \
                          and assist with various tasks. It uses advanced natural language \
                          processing to understand context and generate human-like responses."
                .to_string(),
            short_description: "Advanced AI chatbot for conversations, writing, and \
                                problem-solving."
                .to_string(),
            category: "chat".into(),
            pricing: Pricing::Freemium,
            price_details: Some("Free tier available, Plus at $20/month".to_string()),
            features: strings(&[
                "Natural language conversations",
                "Code generation",
                "Content writing",
                "Language translation",
                "Data analysis",
                "Custom GPTs",
            ]),
            pros: strings(&[
                "Highly versatile",
                "Excellent for writing",
                "Regular updates",
                "Large knowledge base",
            ]),
            cons: strings(&[
                "Can hallucinate facts",
                "Knowledge cutoff",
                "Rate limits on free tier",
            ]),
            official_url: "https://chat.openai.com".to_string(),
            affiliate_url: None,
            screenshots: Vec::new(),
            rating: 4.8,
            review_count: 12500,
            created_at: date(2022, 11, 30),
            trending: true,
            featured: true,
        },
        Tool {
            slug: "midjourney".into(),
            name: "Midjourney".to_string(),
            logo_url: "https://seeklogo.com/images/M/midjourney-logo-F5D54CEF90-seeklogo.com.png"
                .to_string(),
            description: "Midjourney is an AI image generation tool that creates stunning \
                          artwork from text descriptions. It excels at creating artistic, \
                          imaginative visuals with unique aesthetics and high-quality outputs."
                .to_string(),
            short_description: "Create stunning AI art from text descriptions.".to_string(),
            category: "image".into(),
            pricing: Pricing::Paid,
            price_details: Some("Starting at $10/month".to_string()),
            features: strings(&[
                "Text-to-image generation",
                "Style customization",
                "High resolution outputs",
                "Variation generation",
                "Upscaling",
            ]),
            pros: strings(&[
                "Beautiful artistic style",
                "High quality outputs",
                "Active community",
            ]),
            cons: strings(&["No free tier", "Discord-only interface", "Learning curve"]),
            official_url: "https://midjourney.com".to_string(),
            affiliate_url: None,
            screenshots: Vec::new(),
            rating: 4.7,
            review_count: 8900,
            created_at: date(2022, 7, 12),
            trending: true,
            featured: false,
        },
        Tool {
            slug: "github-copilot".into(),
            name: "GitHub Copilot".to_string(),
            logo_url: "https://github.githubassets.com/images/modules/site/copilot/copilot-logo.svg"
                .to_string(),
            description: "GitHub Copilot is an AI pair programmer that helps you write code \
                          faster. It suggests whole lines or entire functions based on context, \
                          comments, and existing code patterns."
                .to_string(),
            short_description: "AI pair programmer that helps you write code faster.".to_string(),
            category: "code".into(),
            pricing: Pricing::Paid,
            price_details: Some("$10/month or $100/year".to_string()),
            features: strings(&[
                "Code completion",
                "Multi-language support",
                "IDE integration",
                "Comment-to-code",
                "Test generation",
            ]),
            pros: strings(&[
                "Excellent code suggestions",
                "Wide language support",
                "Great IDE integration",
            ]),
            cons: strings(&[
                "Subscription required",
                "Can suggest incorrect code",
                "Privacy concerns",
            ]),
            official_url: "https://github.com/features/copilot".to_string(),
            affiliate_url: None,
            screenshots: Vec::new(),
            rating: 4.6,
            review_count: 6500,
            created_at: date(2021, 10, 29),
            trending: false,
            featured: true,
        },
        Tool {
            slug: "claude".into(),
            name: "Claude".to_string(),
            logo_url: "https://upload.wikimedia.org/wikipedia/commons/7/78/Anthropic_logo.svg"
                .to_string(),
            description: "Claude is an AI assistant created by Anthropic, designed to be \
                          helpful, harmless, and honest. It excels at thoughtful analysis, \
                          creative writing, and complex reasoning tasks."
                .to_string(),
            short_description: "Thoughtful AI assistant for analysis and creative tasks."
                .to_string(),
            category: "chat".into(),
            pricing: Pricing::Freemium,
            price_details: Some("Free tier, Pro at $20/month".to_string()),
            features: strings(&[
                "Long context window",
                "Document analysis",
                "Creative writing",
                "Code assistance",
                "Research help",
            ]),
            pros: strings(&[
                "Very thoughtful responses",
                "Excellent at nuance",
                "Long context handling",
            ]),
            cons: strings(&[
                "Newer than competitors",
                "Limited integrations",
                "Occasional refusals",
            ]),
            official_url: "https://claude.ai".to_string(),
            affiliate_url: None,
            screenshots: Vec::new(),
            rating: 4.7,
            review_count: 4200,
            created_at: date(2023, 3, 14),
            trending: true,
            featured: false,
        },
        Tool {
            slug: "notion-ai".into(),
            name: "Notion AI".to_string(),
            logo_url: "https://upload.wikimedia.org/wikipedia/commons/4/45/Notion_app_logo.png"
                .to_string(),
            description: "Notion AI integrates artificial intelligence directly into your \
                          Notion workspace, helping you write faster, think bigger, and \
                          augment your creativity."
                .to_string(),
            short_description: "AI-powered writing and productivity in Notion.".to_string(),
            category: "productivity".into(),
            pricing: Pricing::Paid,
            price_details: Some("$10/member/month add-on".to_string()),
            features: strings(&[
                "Writing assistance",
                "Summarization",
                "Translation",
                "Brainstorming",
                "Action items extraction",
            ]),
            pros: strings(&[
                "Seamless Notion integration",
                "Great for documentation",
                "Easy to use",
            ]),
            cons: strings(&[
                "Requires Notion subscription",
                "Limited standalone use",
                "Add-on cost",
            ]),
            official_url: "https://notion.so/product/ai".to_string(),
            affiliate_url: None,
            screenshots: Vec::new(),
            rating: 4.4,
            review_count: 3800,
            created_at: date(2023, 2, 22),
            trending: false,
            featured: false,
        },
        Tool {
            slug: "runway".into(),
            name: "Runway".to_string(),
            logo_url: "https://framerusercontent.com/images/JzKu2uHMj2wHnXKUMnW1C6aWIpQ.png"
                .to_string(),
            description: "Runway is a creative suite powered by AI that enables video \
                          generation, editing, and visual effects. Their Gen-2 model can \
                          generate videos from text or images."
                .to_string(),
            short_description: "AI-powered video generation and creative tools.".to_string(),
            category: "video".into(),
            pricing: Pricing::Freemium,
            price_details: Some("Free tier, Standard at $12/month".to_string()),
            features: strings(&[
                "Text-to-video",
                "Image-to-video",
                "Video editing",
                "Green screen",
                "Motion tracking",
            ]),
            pros: strings(&[
                "Cutting-edge video AI",
                "Professional features",
                "Regular updates",
            ]),
            cons: strings(&["Credits system", "Can be expensive", "Learning curve"]),
            official_url: "https://runwayml.com".to_string(),
            affiliate_url: None,
            screenshots: Vec::new(),
            rating: 4.5,
            review_count: 2900,
            created_at: date(2023, 3, 20),
            trending: true,
            featured: false,
        },
        Tool {
            slug: "jasper".into(),
            name: "Jasper".to_string(),
            logo_url: "https://assets-global.website-files.com/60e5f2de011b86acebc30db7/60e5f2de011b864ce2c30e2f_Jasper%20Logo.svg"
                .to_string(),
            description: "Jasper is an AI content platform designed for marketing teams. It \
                          helps create blog posts, social media content, emails, and more \
                          with brand voice consistency."
                .to_string(),
            short_description: "AI content creation for marketing teams.".to_string(),
            category: "writing".into(),
            pricing: Pricing::Paid,
            price_details: Some("Starting at $49/month".to_string()),
            features: strings(&[
                "Blog writing",
                "Ad copy",
                "Social media",
                "Brand voice",
                "Templates",
                "Team collaboration",
            ]),
            pros: strings(&["Marketing focused", "Great templates", "Brand voice feature"]),
            cons: strings(&["Expensive", "Learning curve", "Can feel generic"]),
            official_url: "https://jasper.ai".to_string(),
            affiliate_url: None,
            screenshots: Vec::new(),
            rating: 4.3,
            review_count: 5100,
            created_at: date(2021, 1, 1),
            trending: false,
            featured: false,
        },
        Tool {
            slug: "elevenlabs".into(),
            name: "ElevenLabs".to_string(),
            logo_url: "https://storage.googleapis.com/eleven-public-cdn/images/logo-sq.png"
                .to_string(),
            description: "ElevenLabs provides AI voice generation and text-to-speech \
                          technology. Create realistic voiceovers, clone voices, and generate \
                          speech in multiple languages."
                .to_string(),
            short_description: "AI voice generation and text-to-speech.".to_string(),
            category: "audio".into(),
            pricing: Pricing::Freemium,
            price_details: Some("Free tier, Creator at $22/month".to_string()),
            features: strings(&[
                "Text-to-speech",
                "Voice cloning",
                "Multiple languages",
                "Voice library",
                "API access",
            ]),
            pros: strings(&[
                "Extremely realistic voices",
                "Voice cloning",
                "Good free tier",
            ]),
            cons: strings(&[
                "Character limits",
                "Voice cloning ethics",
                "Premium for best voices",
            ]),
            official_url: "https://elevenlabs.io".to_string(),
            affiliate_url: None,
            screenshots: Vec::new(),
            rating: 4.6,
            review_count: 3400,
            created_at: date(2022, 1, 1),
            trending: false,
            featured: true,
        },
    ]
}

pub(super) fn categories() -> Vec<Category> {
    vec![
        Category {
            slug: "writing".into(),
            name: "Writing".to_string(),
            icon: "pen-tool".to_string(),
            description: "AI-powered writing assistants".to_string(),
            count: 45,
            color: "writing".to_string(),
        },
        Category {
            slug: "image".into(),
            name: "Image Generation".to_string(),
            icon: "image".to_string(),
            description: "Create stunning visuals with AI".to_string(),
            count: 38,
            color: "image".to_string(),
        },
        Category {
            slug: "video".into(),
            name: "Video".to_string(),
            icon: "video".to_string(),
            description: "AI video creation and editing".to_string(),
            count: 24,
            color: "video".to_string(),
        },
        Category {
            slug: "audio".into(),
            name: "Audio & Music".to_string(),
            icon: "music".to_string(),
            description: "AI audio tools and music generation".to_string(),
            count: 19,
            color: "audio".to_string(),
        },
        Category {
            slug: "code".into(),
            name: "Code".to_string(),
            icon: "code".to_string(),
            description: "AI coding assistants".to_string(),
            count: 32,
            color: "code".to_string(),
        },
        Category {
            slug: "chat".into(),
            name: "Chatbots".to_string(),
            icon: "message-square".to_string(),
            description: "Conversational AI assistants".to_string(),
            count: 28,
            color: "chat".to_string(),
        },
        Category {
            slug: "productivity".into(),
            name: "Productivity".to_string(),
            icon: "zap".to_string(),
            description: "Boost your workflow with AI".to_string(),
            count: 56,
            color: "productivity".to_string(),
        },
        Category {
            slug: "research".into(),
            name: "Research".to_string(),
            icon: "search".to_string(),
            description: "AI research and analysis tools".to_string(),
            count: 21,
            color: "research".to_string(),
        },
    ]
}

pub(super) fn tutorials() -> Vec<Tutorial> {
    vec![
        Tutorial {
            id: "1".into(),
            title: "Getting Started with ChatGPT: A Complete Beginner's Guide".to_string(),
            thumbnail_url: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800"
                .to_string(),
            category: "chat".into(),
            excerpt: "Learn how to use ChatGPT effectively for writing, coding, and daily tasks."
                .to_string(),
            body_markdown: "\
## What is ChatGPT?

ChatGPT is a conversational AI assistant. You type a request in plain \
language and it responds with text, code, or structured answers. No setup is \
required beyond creating an account.

## Writing your first prompt

A good prompt states three things:

1. **Who you are**: \"I'm a marketing manager preparing a launch email.\"
2. **What you want**: \"Draft three subject lines under 50 characters.\"
3. **What good looks like**: \"Friendly tone, no exclamation marks.\"

Vague requests get vague answers. Specific requests get drafts you can \
actually use.

## Everyday uses

- Summarizing long documents before a meeting
- Turning bullet points into a first draft
- Explaining unfamiliar code line by line
- Translating text while keeping the original tone

## Things to watch for

ChatGPT can state wrong facts with full confidence. Treat every factual \
claim as a draft to verify, not a source to cite.
"
            .to_string(),
            author: "Sarah Johnson".to_string(),
            read_time_minutes: 8,
            published_at: date(2024, 1, 15),
        },
        Tutorial {
            id: "2".into(),
            title: "Mastering Midjourney Prompts for Stunning AI Art".to_string(),
            thumbnail_url: "https://images.unsplash.com/photo-1547826039-bfc35e0f1ea8?w=800"
                .to_string(),
            category: "image".into(),
            excerpt: "Discover the secrets to crafting perfect prompts for beautiful \
                      AI-generated images."
                .to_string(),
            body_markdown: "\
## Anatomy of a strong prompt

Midjourney rewards structure. Build prompts from four parts, in order:

| Part | Example |
| --- | --- |
| Subject | `a lighthouse on a cliff` |
| Style | `watercolor, muted palette` |
| Lighting | `golden hour, long shadows` |
| Framing | `wide shot, rule of thirds` |

## Iterating on results

Never settle for the first grid. Use variations on the image closest to \
your vision, then upscale once the composition is right.

- `--ar 16:9` sets the aspect ratio
- `--no text` removes unwanted elements
- `--stylize` trades prompt accuracy for artistic flair

## Common mistakes

Overloading a prompt with twenty adjectives dilutes all of them. Pick the \
three that matter and let the model fill in the rest.
"
            .to_string(),
            author: "Mike Chen".to_string(),
            read_time_minutes: 12,
            published_at: date(2024, 1, 10),
        },
        Tutorial {
            id: "3".into(),
            title: "AI Coding Assistants: How to 10x Your Productivity".to_string(),
            thumbnail_url: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=800"
                .to_string(),
            category: "code".into(),
            excerpt: "Compare GitHub Copilot, Cursor, and other AI coding tools to supercharge \
                      your development."
                .to_string(),
            body_markdown: "\
## Where assistants actually help

AI pair programmers shine on the repetitive middle of a task: filling in \
boilerplate, writing the fifth similar test case, translating a function \
between languages. They are weakest at the edges, understanding your \
system's invariants and naming things well.

## Picking a tool

- **GitHub Copilot** lives inside your existing editor and completes as \
you type.
- **Cursor** rethinks the whole editor around AI chat and multi-file edits.
- **Chat assistants** work best for rubber-ducking a design before you \
write any code.

## Working habits that compound

1. Write the function signature and doc comment first; completions improve \
dramatically with intent on screen.
2. Review every suggestion as if it came from a new hire.
3. Keep generated tests, they catch regressions the assistant itself \
introduces later.
"
            .to_string(),
            author: "Alex Rivera".to_string(),
            read_time_minutes: 15,
            published_at: date(2024, 1, 5),
        },
        Tutorial {
            id: "4".into(),
            title: "Building a Content Strategy with AI Writing Tools".to_string(),
            thumbnail_url: "https://images.unsplash.com/photo-1455390582262-044cdead277a?w=800"
                .to_string(),
            category: "writing".into(),
            excerpt: "Learn how to integrate AI writing assistants into your content workflow."
                .to_string(),
            body_markdown: "\
## Start with the calendar, not the tool

AI writing tools multiply output, so decide what is worth multiplying \
first. Map one month of topics against your audience's questions before \
generating a single draft.

## A workflow that keeps your voice

1. Outline by hand. The structure is the strategy.
2. Generate a first draft per section, not per article.
3. Edit ruthlessly, delete anything you wouldn't say out loud.
4. Run a final pass for claims that need a source.

## Measuring whether it works

Track time-to-publish and engagement separately. AI reliably improves the \
first; only good editing improves the second.
"
            .to_string(),
            author: "Emma Wilson".to_string(),
            read_time_minutes: 10,
            published_at: date(2024, 1, 1),
        },
    ]
}

pub(super) fn submissions() -> Vec<Submission> {
    vec![
        Submission {
            id: "1".to_string(),
            company_name: "TechCorp".to_string(),
            tool_name: "AI Writer Pro".to_string(),
            email: email("contact@techcorp.com"),
            status: "pending".to_string(),
        },
        Submission {
            id: "2".to_string(),
            company_name: "DataAI Inc".to_string(),
            tool_name: "Smart Analytics".to_string(),
            email: email("hello@dataai.com"),
            status: "pending".to_string(),
        },
    ]
}

pub(super) fn subscribers() -> Vec<Subscriber> {
    vec![
        Subscriber {
            id: "1".to_string(),
            email: email("john@example.com"),
            subscribed_at: date(2024, 1, 15),
        },
        Subscriber {
            id: "2".to_string(),
            email: email("jane@example.com"),
            subscribed_at: date(2024, 1, 14),
        },
        Subscriber {
            id: "3".to_string(),
            email: email("bob@example.com"),
            subscribed_at: date(2024, 1, 13),
        },
    ]
}
