pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 注册缓存后端插件的宏
///
/// 在实现文件顶部声明，进程启动时通过 ctor 写入注册表：
/// `declare_object_cache_plugin!("moka", MokaCacheWrapper);`
/// 要求类型提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ident) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(
                    || -> $crate::cache::register::BoxedObjectCacheFuture {
                        Box::pin(async {
                            let cache = <$ty>::new()
                                .map_err($crate::errors::MaktabError::cache_connection)?;
                            Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                        })
                    },
                ),
            );
        }
    };
}
