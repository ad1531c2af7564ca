//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# dotfield configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[theme]
name = "dark"              # dark or light

[grid]
# spacing = 26.0           # > 0, logical pixels
# density = 0.9            # (0, 1], multiplies spacing
# dot_size = 2.0           # > 0, dot radius

[force]
# max_distance = 120.0     # > 0
# strength = 25.0          # >= 0

[glow]
# intensity = 6.0          # shadow blur, >= 0
# opacity = 0.8            # 0.0-1.0

[palette.dark_pointer]
start = [100, 100, 255]
end = [255, 100, 100]

[palette.dark_hand]
start = [100, 255, 180]
end = [255, 200, 80]

[palette.light_pointer]
start = [50, 50, 200]
end = [200, 50, 50]

[palette.light_hand]
start = [20, 140, 90]
end = [200, 120, 20]

[background]
# dark = "rgb(0, 0, 0)"
# light = "rgb(255, 255, 255)"

[edge]
# gradient_size = 64.0     # >= 0

[animation]
# transition_ms = 600.0    # > 0
# target_fps = 90          # 1-240

[hand]
# min_keypoints = 21       # 21 or more
# warmup_ms = 500          # 0-10000
# detection_interval_ms = 16   # 1-1000
# detection_confidence = 0.5
# tracking_confidence = 0.5
# max_hands = 1            # 1-4

[hand.video]
# min_width = 320
# ideal_width = 640
# max_width = 1280
# min_height = 240
# ideal_height = 480
# max_height = 720

[logging]
# level = "info"           # trace, debug, info, warn, error
# dedup_window_ms = 100    # 0-60000
# dedup_capacity = 256
"##
    .to_string()
}
