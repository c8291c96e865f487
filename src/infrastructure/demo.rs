/// Embedded demo series used whenever external CSV data is unavailable.
/// Kept large enough to clear every summary guard so the charts and the
/// stats panel always render out of the box.
pub const DEMO_CSV: &str = "\
Date,Close,Signal,TN_TP_FP_FN,Equity Value,DCA Value
2023-10-02,4288.39,Hold,TN,1000.0,1000.0
2023-10-03,4229.45,Hold,TN,1000.0,986.26
2023-10-04,4263.75,Hold,FN,1000.0,994.25
2023-10-05,4258.19,Hold,FN,1000.0,992.96
2023-10-06,4308.50,Buy,TP,1000.0,1004.69
2023-10-09,4335.66,Buy,TP,1006.30,1011.02
2023-10-10,4358.24,Buy,TP,1011.54,1016.29
2023-10-11,4376.95,Buy,TP,1015.89,1020.65
2023-10-12,4349.61,Hold,TN,1009.54,1014.28
2023-10-13,4327.78,Hold,TN,1009.54,1009.19
2023-10-16,4373.63,Buy,FP,1009.54,1019.88
2023-10-17,4373.20,Buy,FP,1009.44,1019.78
2023-10-18,4314.60,Hold,TN,995.92,1006.11
2023-10-19,4278.00,Hold,TN,995.92,997.58
2023-10-20,4224.16,Hold,TN,995.92,985.02
2023-10-23,4217.04,Hold,FN,995.92,983.36
2023-10-24,4247.68,Buy,TP,995.92,990.51
2023-10-25,4186.77,Hold,TN,981.64,976.30
2023-10-26,4137.23,Hold,TN,981.64,964.75
2023-10-27,4117.37,Hold,FN,981.64,960.12
2023-10-30,4166.82,Buy,TP,981.64,971.65
2023-10-31,4193.80,Buy,TP,988.00,977.94
2023-11-01,4237.86,Buy,TP,998.38,988.22
2023-11-02,4317.78,Buy,TP,1017.21,1006.85
2023-11-03,4358.34,Buy,TP,1026.77,1016.31
2023-11-06,4365.98,Buy,TP,1028.57,1018.09
2023-11-07,4378.38,Buy,TP,1031.49,1020.98
2023-11-08,4382.78,Buy,TP,1032.52,1022.01
2023-11-09,4347.35,Hold,TN,1024.18,1013.75
2023-11-10,4415.24,Buy,TP,1024.18,1029.58
2023-11-13,4411.55,Buy,TP,1023.32,1028.72
2023-11-14,4495.70,Buy,TP,1042.84,1048.34
2023-11-15,4502.88,Buy,TP,1044.51,1050.01
2023-11-16,4508.24,Buy,TP,1045.75,1051.26
2023-11-17,4514.02,Buy,TP,1047.09,1052.61
2023-11-20,4547.38,Buy,TP,1054.83,1060.39
2023-11-21,4538.19,Hold,TN,1052.70,1058.25
2023-11-22,4556.62,Buy,TP,1052.70,1062.55
2023-11-24,4559.34,Buy,TP,1053.33,1063.18
2023-11-27,4550.43,Hold,TN,1051.27,1061.10
2023-11-28,4554.89,Buy,TP,1051.27,1062.14
2023-11-29,4550.58,Buy,TP,1050.28,1061.14
2023-11-30,4567.80,Buy,TP,1054.25,1065.15
2023-12-01,4594.63,Buy,TP,1060.44,1071.41
2023-12-04,4569.78,Hold,TN,1054.71,1065.61
2023-12-05,4567.18,Hold,FN,1054.71,1065.01
2023-12-06,4549.34,Hold,TN,1054.71,1060.85
2023-12-07,4585.59,Buy,TP,1054.71,1069.30";
