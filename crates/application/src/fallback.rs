//! Fallback selector
//!
//! When the hosted model cannot answer, a canned topic paragraph is chosen
//! by scanning the lower-cased question against an ordered keyword table,
//! and an error-specific guidance block is appended. Pure function of its
//! inputs; never fails.

use domain::Question;

/// Failure category that routed the question to the fallback selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackCategory {
    /// The credential lacks permission for the model (HTTP 403)
    InsufficientPermissions,
    /// The model is unknown or not loaded (HTTP 404)
    ModelNotFound,
    /// Any other remote API failure
    ApiError,
}

const TRENDS_PARAGRAPH: &str = "**Current Retail Trends:**
• Sustainable and eco-friendly products are driving consumer choices
• Omnichannel experiences combining online and in-store shopping
• AI-powered personalization and recommendation systems
• Social commerce through Instagram, TikTok, and influencer partnerships
• Buy-now-pay-later payment options becoming standard
• Voice commerce and smart home integration
• Subscription-based retail models expanding";

const SAVINGS_PARAGRAPH: &str = "**Money-Saving Shopping Tips:**
• Compare prices across multiple retailers before buying
• Sign up for store newsletters to get exclusive discounts
• Use cashback apps and browser extensions
• Shop during major sale events (Black Friday, end-of-season sales)
• Check for price-match policies at major retailers
• Consider buying generic or store brands for basics
• Use loyalty programs and accumulate points";

const PRODUCT_RESEARCH_PARAGRAPH: &str = "**Product Research Tips:**
• Read customer reviews on multiple platforms
• Check professional review sites for detailed comparisons
• Consider your specific needs and budget constraints
• Look for products with good warranty and return policies
• Research brand reputation and customer service quality
• Compare features vs. price across similar products
• Ask for recommendations from friends and online communities";

const RETURNS_PARAGRAPH: &str = "**Return and Exchange Guidelines:**
• Always keep receipts and original packaging
• Check return policies before purchasing (timeframes vary)
• Many retailers offer 30-90 day return windows
• Online purchases often have longer return periods
• Some items (electronics, clothing) may have restocking fees
• Contact customer service for damaged or defective items
• Consider extended warranties for expensive electronics";

const ONLINE_SHOPPING_PARAGRAPH: &str = "**Safe Online Shopping Practices:**
• Shop only on secure websites (look for HTTPS)
• Use secure payment methods (credit cards, PayPal)
• Read seller reviews and ratings carefully
• Check shipping costs and delivery timeframes
• Save confirmation emails and tracking information
• Be cautious of deals that seem too good to be true
• Use strong passwords and enable two-factor authentication";

const GENERAL_PARAGRAPH: &str = "**General Retail Insights:**
• The retail industry is rapidly evolving with technology
• Customer experience is becoming more important than price alone
• Mobile shopping continues to grow significantly
• Sustainability is increasingly important to consumers
• Local and small businesses are finding new ways to compete
• Data analytics help retailers understand customer preferences
• The line between online and offline shopping continues to blur";

const PERMISSIONS_GUIDANCE: &str = "**⚠️ API Limitation Notice:**
Your HuggingFace API key has limited permissions. For full AI-powered responses:
• Upgrade to HuggingFace Pro ($9/month) at huggingface.co/pricing
• Or provide an OpenAI API key for even better responses";

const MODEL_GUIDANCE: &str = "**⚠️ Model Access Issue:**
The AI model is temporarily unavailable. For full functionality:
• Try upgrading your HuggingFace account permissions
• Or I can modify this app to use OpenAI's API instead";

const API_GUIDANCE: &str = "**⚠️ API Connection Issue:**
There's a temporary issue with the AI service. For full functionality:
• Check your internet connection
• Or consider upgrading to a more reliable AI service";

/// Ordered (keyword set, paragraph) table; first match wins.
/// Adding a topic is a data change, not a code change.
const TOPIC_TABLE: &[(&[&str], &str)] = &[
    (
        &["trend", "trending", "popular", "latest", "new"],
        TRENDS_PARAGRAPH,
    ),
    (
        &["deal", "save", "discount", "cheap", "best price"],
        SAVINGS_PARAGRAPH,
    ),
    (
        &["recommend", "suggest", "best", "review"],
        PRODUCT_RESEARCH_PARAGRAPH,
    ),
    (
        &["return", "exchange", "refund", "customer service"],
        RETURNS_PARAGRAPH,
    ),
    (
        &["online", "ecommerce", "internet", "website"],
        ONLINE_SHOPPING_PARAGRAPH,
    ),
];

/// Select the topic paragraph for a question
fn topic_paragraph(question: &Question) -> &'static str {
    let lowered = question.to_lowercase();

    TOPIC_TABLE
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map_or(GENERAL_PARAGRAPH, |(_, paragraph)| *paragraph)
}

/// Guidance block for a failure category
const fn guidance(category: FallbackCategory) -> &'static str {
    match category {
        FallbackCategory::InsufficientPermissions => PERMISSIONS_GUIDANCE,
        FallbackCategory::ModelNotFound => MODEL_GUIDANCE,
        FallbackCategory::ApiError => API_GUIDANCE,
    }
}

/// Build the full fallback answer: topic paragraph plus guidance block
pub fn fallback_response(question: &Question, category: FallbackCategory) -> String {
    format!("{}\n\n{}", topic_paragraph(question), guidance(category))
}
