/// The built-in sample roster: 20 example names.
pub const SAMPLE_NAMES: [&str; 20] = [
    "陳小明", "林美華", "張志強", "李淑芬", "王建國", "吳雅婷", "劉冠宇", "蔡欣怡", "楊家豪", "許雅雯",
    "鄭志偉", "謝佳穎", "洪志明", "郭怡君", "曾國華", "邱佩珊", "廖志強", "賴俊宏", "徐淑惠", "周建志",
];
