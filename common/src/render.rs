use crate::{
    types::{AcMode, AcStatus},
    view::{AcTargets, Target},
};

pub const FEEDBACK_PREFIX: &str = "状态：";
pub const FEEDBACK_SENDING: &str = "状态：发送中...";
pub const STATUS_READ_FAILED: &str = "状态读取失败";

const STATE_PREFIX: &str = "当前：";
const STATE_SEPARATOR: &str = " / ";
const FAN_LABEL: &str = "风量:";
const POWER_ON: &str = "开机";
const POWER_OFF: &str = "关机";
const MODE_HEAT: &str = "暖房";
const MODE_COOL: &str = "冷房";

pub fn feedback_for_reply(body: &str) -> String {
    format!("{FEEDBACK_PREFIX}{body}")
}

pub fn status_line(status: &AcStatus) -> String {
    let power = if status.power { POWER_ON } else { POWER_OFF };
    let mode = match status.mode {
        AcMode::Heat => MODE_HEAT,
        AcMode::Cool => MODE_COOL,
    };
    format!(
        "{STATE_PREFIX}{power}{STATE_SEPARATOR}{mode}{STATE_SEPARATOR}{FAN_LABEL}{}",
        status.fan
    )
}

/// Region updates for a fresh status snapshot, limited to the regions shown.
pub fn render(status: &AcStatus, targets: AcTargets) -> Vec<(Target, String)> {
    let mut updates = Vec::with_capacity(3);
    if targets.temp {
        updates.push((Target::Temp, status.temp.to_string()));
    }
    if targets.state {
        updates.push((Target::State, status_line(status)));
    }
    if targets.left {
        updates.push((Target::Left, status.timer_left.clone()));
    }
    updates
}

/// Region updates after a failed poll. Only the status line changes; the
/// temperature and timer keep whatever they showed before.
pub fn render_failure(targets: AcTargets) -> Vec<(Target, String)> {
    if targets.state {
        vec![(Target::State, STATUS_READ_FAILED.to_string())]
    } else {
        Vec::new()
    }
}
