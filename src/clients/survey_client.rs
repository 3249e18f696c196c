/// 问卷保存客户端
///
/// 封装唯一一个对外的写操作：`POST {API_URL}/surveys/save`
use crate::config::Config;
use crate::error::{PersistError, TransportError};
use crate::infrastructure::{AuthContext, SurveyTransport};
use crate::models::SurveyAggregate;
use serde_json::Value;
use tracing::{debug, info, warn};

/// 服务端确认，即响应体 JSON
#[derive(Debug, Clone, PartialEq)]
pub struct ServerAck(pub Value);

impl ServerAck {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// 问卷保存客户端
pub struct SurveyClient<A, T> {
    base_url: String,
    auth: A,
    transport: T,
}

impl<A: AuthContext, T: SurveyTransport> SurveyClient<A, T> {
    /// 创建新的保存客户端
    pub fn new(config: &Config, auth: A, transport: T) -> Self {
        Self::with_base_url(&config.api_base_url, auth, transport)
    }

    pub fn with_base_url(base_url: &str, auth: A, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            transport,
        }
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 保存接口地址
    pub fn save_url(&self) -> String {
        format!("{}/surveys/save", self.base_url)
    }

    /// 保存问卷
    ///
    /// # 参数
    /// - `aggregate`: 本次保存的问卷快照
    ///
    /// # 返回
    /// 返回服务端响应；没有令牌时不发请求，直接返回 `Unauthenticated`
    pub async fn save(&self, aggregate: &SurveyAggregate) -> Result<ServerAck, PersistError> {
        let Some(token) = self.auth.id_token().await else {
            warn!("⚠️ 没有可用的身份令牌，取消保存");
            return Err(PersistError::Unauthenticated);
        };

        let url = self.save_url();
        let body = serde_json::to_value(aggregate).map_err(|e| PersistError::SaveFailed {
            source: TransportError::InvalidBody {
                endpoint: url.clone(),
                source: Box::new(e),
            },
        })?;

        debug!(
            "保存问卷: {} 道题目 -> {}",
            aggregate.questions().len(),
            url
        );

        match self.transport.post_json(&url, &token, &body).await {
            Ok(result) => {
                info!("✓ 问卷保存成功");
                Ok(ServerAck(result))
            }
            Err(e) => {
                warn!("⚠️ 问卷保存失败: {}", e);
                Err(PersistError::SaveFailed { source: e })
            }
        }
    }
}
