//! Maktab - 学校管理平台后端服务
//!
//! 基于 Actix Web 构建的学校作业/评价管理系统后端：学生上传作业由
//! AI 评分，教师审核提交，学生对教师投票，管理员查看汇总统计。
//!
//! # 架构
//! - `cache`: 缓存层（Moka/Redis）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权中间件
//! - `models`: 数据模型定义
//! - `oracle`: AI 评分服务客户端
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod oracle;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
