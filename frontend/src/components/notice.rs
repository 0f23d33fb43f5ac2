use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
    Info,
}

impl NoticeKind {
    pub fn color(self) -> &'static str {
        match self {
            NoticeKind::Error => "#c0392b",
            NoticeKind::Success => "#0b6b3a",
            NoticeKind::Info => "#333",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Notice { text: text.into(), kind: NoticeKind::Error }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Notice { text: text.into(), kind: NoticeKind::Success }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Notice { text: text.into(), kind: NoticeKind::Info }
    }

    pub fn style(&self) -> String {
        format!("margin-top: 12px; font-size: 0.95rem; color: {};", self.kind.color())
    }
}

#[derive(Properties, PartialEq)]
pub struct FormNoticeProps {
    pub notice: Notice,
}

#[function_component(FormNotice)]
pub fn form_notice(props: &FormNoticeProps) -> Html {
    let role = if props.notice.kind == NoticeKind::Error { "alert" } else { "status" };

    html! {
        <div class="form-notice" role={role} style={props.notice.style()}>
            {&props.notice.text}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_color_coded() {
        assert_eq!(Notice::error("x").style(), "margin-top: 12px; font-size: 0.95rem; color: #c0392b;");
        assert_eq!(Notice::success("x").kind.color(), "#0b6b3a");
        assert_eq!(Notice::info("x").kind.color(), "#333");
    }
}
