use super::code_block::CodeBlock;
use contracts::domain::a001_csv_session::ConversationTurn;
use leptos::prelude::*;
use thaw::*;

/// Блоки пузыря ассистента в порядке отображения
#[derive(Debug, Clone, PartialEq)]
enum AssistantPart {
    Spinner,
    Code(String),
    Stdout(String),
    Explanation(String),
    Images(Vec<String>),
}

/// Пока ждём ответ - только спиннер; иначе код, вывод, пояснение, графики
fn assistant_parts(turn: &ConversationTurn) -> Vec<AssistantPart> {
    if turn.is_pending() {
        return vec![AssistantPart::Spinner];
    }
    let mut parts = Vec::new();
    if turn.has_code() {
        parts.push(AssistantPart::Code(turn.code.clone()));
    }
    if turn.has_stdout() {
        parts.push(AssistantPart::Stdout(turn.stdout.clone()));
    }
    parts.push(AssistantPart::Explanation(turn.explanation.clone()));
    if !turn.images.is_empty() {
        parts.push(AssistantPart::Images(turn.images.clone()));
    }
    parts
}

fn model_tag_text(turn: &ConversationTurn) -> Option<String> {
    turn.model_used
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .map(|m| format!("Model: {}", m))
}

fn render_part(part: AssistantPart) -> AnyView {
    match part {
        AssistantPart::Spinner => view! {
            <div class="assistant-pending">
                <Spinner size=SpinnerSize::Tiny />
            </div>
        }
        .into_any(),
        AssistantPart::Code(code) => view! { <CodeBlock code=code /> }.into_any(),
        AssistantPart::Stdout(stdout) => {
            view! { <pre class="stdout-block">{stdout}</pre> }.into_any()
        }
        AssistantPart::Explanation(text) => {
            view! { <p class="explanation">{text}</p> }.into_any()
        }
        AssistantPart::Images(images) => view! {
            <div class="image-list">
                {images
                    .into_iter()
                    .enumerate()
                    .map(|(i, src)| view! {
                        <img src=src alt=format!("Chart {}", i + 1) class="chart-image" />
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

/// Пузырь пользователя и пузырь ассистента для одной реплики
#[component]
#[allow(non_snake_case)]
pub fn TurnView(turn: ConversationTurn) -> impl IntoView {
    let parts = assistant_parts(&turn);
    let body_class = if turn.is_pending() {
        "assistant-body"
    } else {
        "assistant-body result-block assistant-block"
    };

    let model_tag = model_tag_text(&turn).map(|text| {
        view! {
            <div class="model-tag">
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                    {text}
                </Badge>
            </div>
        }
    });

    view! {
        <div class="message-item">
            <div class="message user-message">
                <div class="avatar user-avatar">"You"</div>
                <div class="message-content">
                    <div class="result-block user-block">{turn.question}</div>
                </div>
            </div>
            <div class="message assistant-message">
                <div class="avatar assistant-avatar">"🤖"</div>
                <div class="message-content">
                    {model_tag}
                    <div class=body_class>
                        {parts.into_iter().map(render_part).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
