use crate::core::templates::display_name;
use crate::domain::model::Email;

pub fn classification_prompt(email: &Email) -> String {
    format!(
        r#"Analyze the following email and classify it into a category and priority level.

Email Details:
From: {sender}
Subject: {subject}
Body: {body}

Categories to choose from:
- technical_support: Issues with software, bugs, errors, login problems
- billing: Payment issues, charges, refunds, pricing questions
- account: Account verification, access issues, account management
- integration: API questions, third-party integrations, CRM connections
- general: General inquiries, questions not fitting other categories

Priority levels:
- high: Urgent issues, system down, critical problems
- medium: Important issues that need attention but not critical
- low: General questions, non-urgent requests

Respond in JSON format only:
{{
    "category": "category_name",
    "priority": "priority_level",
    "reasoning": "Brief explanation of why this classification was chosen"
}}
"#,
        sender = email.sender,
        subject = email.subject,
        body = email.body,
    )
}

pub fn response_prompt(email: &Email, category: &str, tone: &str) -> String {
    let name = display_name(&email.sender);
    format!(
        r#"Generate a customer service email response for the following email:

Original Email:
From: {sender}
Subject: {subject}
Body: {body}

Email Category: {category}
Required Tone: {tone}

Guidelines:
- Address the customer by name: {name}
- Use a {tone} tone throughout
- Acknowledge their concern specifically
- Provide helpful next steps or solutions
- Keep it concise but complete
- End with appropriate contact information
- Don't include subject line, just the email body

Generate only the email response text:
"#,
        sender = email.sender,
        subject = email.subject,
        body = email.body,
    )
}
