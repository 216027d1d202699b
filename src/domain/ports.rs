use crate::domain::batch::{BatchResult, CaseRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn include_side_effects(&self) -> bool;
    fn stop_on_invalid(&self) -> bool;
    fn delimiter(&self) -> u8 {
        b','
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CaseRecord>>;
    async fn transform(&self, cases: Vec<CaseRecord>) -> Result<BatchResult>;
    async fn load(&self, result: BatchResult) -> Result<String>;
}
