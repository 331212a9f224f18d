//! Application-level configuration constants.

// Kernel
pub const KERNEL_VERSION: &str = "0.1.0";

// Output
pub const HEADER_FILE_NAME: &str = "kconfig.h";
pub const HEADER_MIME_TYPE: &str = "text/x-c";
pub const INCLUDE_GUARD: &str = "INC_K_CONFIG_H_";

// UI Behavior
/// Delay before the download object URL is released.
pub const DOWNLOAD_REVOKE_DELAY_MS: u32 = 1000;
pub const STATUS_CLEAR_MS: u32 = 3000;

// Default values for input fields
pub const DEFAULT_THREAD_COUNT: u32 = 3;
pub const DEFAULT_STACK_SIZE: u32 = 128;
pub const DEFAULT_IDLE_TASK_PID: u32 = 0;
pub const DEFAULT_TIMER_HANDLER_PID: u32 = 1;
pub const DEFAULT_NUM_PRIORITIES: u32 = 5;
pub const DEFAULT_TIME_SLICE_MS: u32 = 10;
pub const DEFAULT_NUM_MESSAGE_BUFFERS: u32 = 5;
pub const DEFAULT_TRACE_BUFFER_SIZE: u32 = 512;

// Min/Max limits for input fields
pub const MIN_THREAD_COUNT: u32 = 1;
pub const MAX_THREAD_COUNT: u32 = 32;
pub const MIN_STACK_SIZE: u32 = 64;
pub const MAX_STACK_SIZE: u32 = 1024;
pub const MIN_IDLE_TASK_PID: u32 = 0;
pub const MIN_TIMER_HANDLER_PID: u32 = 1;
pub const MAX_PID: u32 = 255;
pub const MIN_NUM_PRIORITIES: u32 = 1;
pub const MAX_NUM_PRIORITIES: u32 = 32;
pub const MIN_TIME_SLICE_MS: u32 = 1;
pub const MAX_TIME_SLICE_MS: u32 = 100;
pub const MIN_NUM_MESSAGE_BUFFERS: u32 = 1;
pub const MAX_NUM_MESSAGE_BUFFERS: u32 = 32;
pub const MIN_TRACE_BUFFER_SIZE: u32 = 128;
pub const MAX_TRACE_BUFFER_SIZE: u32 = 1024;
