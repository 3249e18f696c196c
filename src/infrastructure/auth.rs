//! 身份上下文 - 基础设施层
//!
//! 登录、注册、匿名账号绑定都由外部身份服务完成；
//! 这里只暴露"当前是否有用户"和"能否拿到 Bearer 令牌"两种能力。

use async_trait::async_trait;

/// 当前登录用户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub uid: String,
    pub is_anonymous: bool,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl CurrentUser {
    /// 匿名用户
    pub fn anonymous(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            is_anonymous: true,
            display_name: None,
            email: None,
        }
    }

    /// 导航栏显示的用户名
    pub fn display_label(&self) -> &str {
        if self.is_anonymous {
            return "Anonymous User";
        }
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.email.as_deref().filter(|email| !email.is_empty()))
            .unwrap_or("Signed In User")
    }
}

/// 身份上下文
///
/// 由调用方注入到保存客户端，而不是从全局状态读取。
#[async_trait]
pub trait AuthContext: Send + Sync {
    /// 当前用户，未登录返回 `None`
    fn current_user(&self) -> Option<CurrentUser>;

    /// 获取身份令牌，无法获取时返回 `None`
    async fn id_token(&self) -> Option<String>;
}

/// 使用固定令牌的身份上下文
///
/// 令牌来自配置（例如 `SURVEY_ID_TOKEN`），为空则视为未登录。
#[derive(Debug, Clone)]
pub struct StaticTokenAuth {
    user: Option<CurrentUser>,
    token: Option<String>,
}

impl StaticTokenAuth {
    pub fn new(user: CurrentUser, token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            user: Some(user),
            token: (!token.trim().is_empty()).then_some(token),
        }
    }

    /// 从可选令牌创建：有令牌时视为匿名会话持有者
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.trim().is_empty() => {
                Self::new(CurrentUser::anonymous("configured"), token)
            }
            _ => Self {
                user: None,
                token: None,
            },
        }
    }
}

#[async_trait]
impl AuthContext for StaticTokenAuth {
    fn current_user(&self) -> Option<CurrentUser> {
        self.user.clone()
    }

    async fn id_token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// 未登录状态
#[derive(Debug, Clone, Copy, Default)]
pub struct SignedOut;

#[async_trait]
impl AuthContext for SignedOut {
    fn current_user(&self) -> Option<CurrentUser> {
        None
    }

    async fn id_token(&self) -> Option<String> {
        None
    }
}
