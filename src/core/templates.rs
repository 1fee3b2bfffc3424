//! Canned reply bodies, keyed by category and tone.

use crate::domain::model::{Category, Tone};

const COURTESY_LINE: &str =
    "If you have any additional questions, please don't hesitate to reach out.";

/// Template-based reply builder. Pure; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateResponseBuilder;

impl TemplateResponseBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds from raw labels. Labels must match exactly. An unknown category
    /// uses the general body for the requested tone; an unknown tone uses the
    /// general professional reply whatever the category.
    pub fn build(&self, sender: &str, category: &str, tone: &str) -> String {
        match Tone::from_label(tone) {
            Some(tone) => self.build_typed(
                sender,
                Category::from_label(category).unwrap_or(Category::General),
                tone,
            ),
            None => self.build_typed(sender, Category::General, Tone::Professional),
        }
    }

    pub fn build_typed(&self, sender: &str, category: Category, tone: Tone) -> String {
        let name = display_name(sender);
        format!(
            "{}\n\n{}\n\n{}\n\n{}",
            greeting(tone, &name),
            body(category, tone),
            COURTESY_LINE,
            closing(tone)
        )
    }
}

/// Local part of the address, dots turned into spaces, title-cased.
///
/// `"jane.doe@example.com"` becomes `"Jane Doe"`.
pub fn display_name(sender: &str) -> String {
    let local = sender.split('@').next().unwrap_or(sender);
    title_case(&local.replace('.', " "))
}

/// Each run of letters starts uppercase with the rest lowercase.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

fn greeting(tone: Tone, name: &str) -> String {
    match tone {
        Tone::Professional | Tone::Formal => format!("Dear {},", name),
        Tone::Friendly => format!("Hi {}!", name),
        Tone::Casual => format!("Hey {},", name),
    }
}

fn closing(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => "Best regards,\nCustomer Support Team",
        Tone::Friendly => "Cheers!\nThe Support Team",
        Tone::Formal => "Sincerely,\nCustomer Service Department",
        Tone::Casual => "Talk soon!\nSupport Team",
    }
}

fn body(category: Category, tone: Tone) -> &'static str {
    match (category, tone) {
        (Category::TechnicalSupport, Tone::Professional) => {
            "Thank you for reaching out regarding the technical issue you're experiencing. I understand how frustrating this must be. Our technical team will investigate this matter promptly and provide you with a resolution within 24 hours."
        }
        (Category::TechnicalSupport, Tone::Friendly) => {
            "Thanks for letting us know about this issue! I totally understand how annoying technical problems can be. Our team is on it and we'll get this sorted out for you ASAP."
        }
        (Category::TechnicalSupport, Tone::Formal) => {
            "We acknowledge receipt of your technical support request. Our engineering team will conduct a thorough investigation and provide you with a comprehensive solution within one business day."
        }
        (Category::TechnicalSupport, Tone::Casual) => {
            "Got it! Thanks for the heads up about this issue. Our tech team will take a look and get back to you soon."
        }
        (Category::Billing, Tone::Professional) => {
            "Thank you for contacting us about your billing inquiry. I will personally review your account and ensure any discrepancies are resolved immediately. You can expect a follow-up within 2 business hours."
        }
        (Category::Billing, Tone::Friendly) => {
            "Thanks for reaching out about your billing question! I'll take a look at your account right away and make sure everything is sorted out for you."
        }
        (Category::Billing, Tone::Formal) => {
            "We have received your billing inquiry and will conduct a comprehensive review of your account. Any necessary adjustments will be processed within 2 business hours."
        }
        (Category::Billing, Tone::Casual) => {
            "Hey! Thanks for the message about billing. I'll check your account and fix any issues right away."
        }
        (Category::Account, Tone::Professional) => {
            "Thank you for your account-related inquiry. I will assist you in resolving this matter promptly. Please allow me to review your account details and provide you with the necessary steps to resolve this issue."
        }
        (Category::Account, Tone::Friendly) => {
            "Thanks for reaching out about your account! I'm here to help you get everything sorted out. Let me look into this for you."
        }
        (Category::Account, Tone::Formal) => {
            "We acknowledge your account verification request. Our security team will review your account and provide the necessary assistance within 4 business hours."
        }
        (Category::Account, Tone::Casual) => {
            "Hey! No worries about the account issue - I'll help you get it sorted out quickly."
        }
        (Category::Integration, Tone::Professional) => {
            "Thank you for your inquiry about our integration capabilities. I would be happy to provide you with detailed information about our API and CRM integration options. Our technical sales team will contact you within 24 hours."
        }
        (Category::Integration, Tone::Friendly) => {
            "Thanks for asking about our integrations! We have some great API and CRM options that I think you'll love. I'll have our tech team reach out with all the details."
        }
        (Category::Integration, Tone::Formal) => {
            "We appreciate your interest in our integration solutions. Our technical team will provide you with comprehensive documentation and integration options within one business day."
        }
        (Category::Integration, Tone::Casual) => {
            "Cool question about integrations! We've got some solid API options. I'll have the team send over the details soon."
        }
        (Category::General, Tone::Professional) => {
            "Thank you for reaching out to us. I have received your inquiry and will ensure you receive the appropriate assistance. Our team will respond with detailed information within 24 hours."
        }
        (Category::General, Tone::Friendly) => {
            "Thanks for getting in touch! I've got your message and will make sure you get the help you need."
        }
        (Category::General, Tone::Formal) => {
            "We acknowledge receipt of your inquiry. Our customer service team will provide you with a comprehensive response within one business day."
        }
        (Category::General, Tone::Casual) => {
            "Hey! Thanks for reaching out. I'll make sure you get the info you need."
        }
    }
}
